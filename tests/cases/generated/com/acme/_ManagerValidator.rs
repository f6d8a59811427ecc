// @generated by bean-dispatch for com.acme._ManagerValidator. Do not edit.
# [doc = " Validator of `com.acme.Manager`."] # [allow (non_camel_case_types)] pub struct _ManagerValidator ; impl _ManagerValidator { # [doc = r" Shared instance."] pub const INSTANCE : Self = Self ; }
