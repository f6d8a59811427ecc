// @generated by bean-dispatch for com.acme._EmployeeValidator. Do not edit.
# [doc = " Validator of `com.acme.Employee`."] # [allow (non_camel_case_types)] pub struct _EmployeeValidator ; impl _EmployeeValidator { # [doc = r" Shared instance."] pub const INSTANCE : Self = Self ; }
