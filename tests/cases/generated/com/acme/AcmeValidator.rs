// @generated by bean-dispatch for com.acme.AcmeValidator. Do not edit.
# [doc = " Dispatching validator over com.acme.Manager, com.acme.Employee."] pub struct AcmeValidator { groups : :: std :: sync :: OnceLock < :: bean_dispatch_core :: GroupChainMetadata > , interpolator : :: std :: boxed :: Box < dyn :: bean_dispatch_core :: MessageInterpolator > , traversable : :: std :: boxed :: Box < dyn :: bean_dispatch_core :: TraversableResolver > } impl AcmeValidator { # [doc = r" Qualified names of every dispatched type, most specific first."] pub const SUPPORTED_TYPES : & 'static [& 'static str] = & ["com.acme.Manager" , "com.acme.Employee"] ; # [doc = r" Validator with the default interpolator and traversable resolver."] pub fn new () -> Self { Self :: with_collaborators (:: std :: boxed :: Box :: new (:: bean_dispatch_core :: DefaultMessageInterpolator) , :: std :: boxed :: Box :: new (:: bean_dispatch_core :: DefaultTraversableResolver)) } # [doc = r" Validator with custom collaborators."] pub fn with_collaborators (interpolator : :: std :: boxed :: Box < dyn :: bean_dispatch_core :: MessageInterpolator > , traversable : :: std :: boxed :: Box < dyn :: bean_dispatch_core :: TraversableResolver >) -> Self { let validator = Self { groups : :: std :: sync :: OnceLock :: new () , interpolator , traversable } ; validator . groups_metadata () ; validator } # [doc = r" Configured groups and sequences."] fn create_groups_metadata () -> :: bean_dispatch_core :: GroupChainMetadata { :: bean_dispatch_core :: GroupChainMetadata :: builder () . add_group (< crate :: javax :: validation :: groups :: Default as :: bean_dispatch_core :: BeanClass > :: CLASS , & []) . build () } # [doc = r" Group-chain metadata, built on first use."] pub fn groups_metadata (& self) -> & :: bean_dispatch_core :: GroupChainMetadata { self . groups . get_or_init (Self :: create_groups_metadata) } # [doc = r" Validate `object` with the validator of its most specific type."] pub fn validate (& self , object : & dyn :: bean_dispatch_core :: Bean , groups : & [& 'static :: bean_dispatch_core :: Class]) -> :: std :: result :: Result < :: std :: vec :: Vec < :: bean_dispatch_core :: ConstraintViolation > , :: bean_dispatch_core :: ValidationError > { if object . is_instance_of (< crate :: com :: acme :: Manager as :: bean_dispatch_core :: BeanClass > :: CLASS) { let context = :: bean_dispatch_core :: ValidationContext :: new (< crate :: com :: acme :: Manager as :: bean_dispatch_core :: BeanClass > :: CLASS , Some (object) , :: bean_dispatch_core :: BeanValidator :: constraints (& crate :: com :: acme :: _ManagerValidator :: INSTANCE , self . groups_metadata ()) , & * self . interpolator , & * self . traversable , self . groups_metadata ()) ; return :: bean_dispatch_core :: BeanValidator :: validate (& crate :: com :: acme :: _ManagerValidator :: INSTANCE , & context , object , groups) ; } if object . is_instance_of (< crate :: com :: acme :: Employee as :: bean_dispatch_core :: BeanClass > :: CLASS) { let context = :: bean_dispatch_core :: ValidationContext :: new (< crate :: com :: acme :: Employee as :: bean_dispatch_core :: BeanClass > :: CLASS , Some (object) , :: bean_dispatch_core :: BeanValidator :: constraints (& crate :: com :: acme :: _EmployeeValidator :: INSTANCE , self . groups_metadata ()) , & * self . interpolator , & * self . traversable , self . groups_metadata ()) ; return :: bean_dispatch_core :: BeanValidator :: validate (& crate :: com :: acme :: _EmployeeValidator :: INSTANCE , & context , object , groups) ; } Err (:: bean_dispatch_core :: ValidationError :: UnsupportedType { found : object . class () . name () , supported : Self :: SUPPORTED_TYPES }) } # [doc = r" Validate one property of `object`."] pub fn validate_property (& self , object : & dyn :: bean_dispatch_core :: Bean , property_name : & str , groups : & [& 'static :: bean_dispatch_core :: Class]) -> :: std :: result :: Result < :: std :: vec :: Vec < :: bean_dispatch_core :: ConstraintViolation > , :: bean_dispatch_core :: ValidationError > { if object . is_instance_of (< crate :: com :: acme :: Manager as :: bean_dispatch_core :: BeanClass > :: CLASS) { let context = :: bean_dispatch_core :: ValidationContext :: new (< crate :: com :: acme :: Manager as :: bean_dispatch_core :: BeanClass > :: CLASS , Some (object) , :: bean_dispatch_core :: BeanValidator :: constraints (& crate :: com :: acme :: _ManagerValidator :: INSTANCE , self . groups_metadata ()) , & * self . interpolator , & * self . traversable , self . groups_metadata ()) ; return :: bean_dispatch_core :: BeanValidator :: validate_property (& crate :: com :: acme :: _ManagerValidator :: INSTANCE , & context , object , property_name , groups) ; } if object . is_instance_of (< crate :: com :: acme :: Employee as :: bean_dispatch_core :: BeanClass > :: CLASS) { let context = :: bean_dispatch_core :: ValidationContext :: new (< crate :: com :: acme :: Employee as :: bean_dispatch_core :: BeanClass > :: CLASS , Some (object) , :: bean_dispatch_core :: BeanValidator :: constraints (& crate :: com :: acme :: _EmployeeValidator :: INSTANCE , self . groups_metadata ()) , & * self . interpolator , & * self . traversable , self . groups_metadata ()) ; return :: bean_dispatch_core :: BeanValidator :: validate_property (& crate :: com :: acme :: _EmployeeValidator :: INSTANCE , & context , object , property_name , groups) ; } Err (:: bean_dispatch_core :: ValidationError :: UnsupportedType { found : object . class () . name () , supported : Self :: SUPPORTED_TYPES }) } # [doc = r" Validate a candidate `value` for a property of `bean_type`."] pub fn validate_value (& self , bean_type : & 'static :: bean_dispatch_core :: Class , property_name : & str , value : & dyn :: std :: any :: Any , groups : & [& 'static :: bean_dispatch_core :: Class]) -> :: std :: result :: Result < :: std :: vec :: Vec < :: bean_dispatch_core :: ConstraintViolation > , :: bean_dispatch_core :: ValidationError > { if bean_type == < crate :: com :: acme :: Manager as :: bean_dispatch_core :: BeanClass > :: CLASS { let context = :: bean_dispatch_core :: ValidationContext :: new (bean_type , None , :: bean_dispatch_core :: BeanValidator :: constraints (& crate :: com :: acme :: _ManagerValidator :: INSTANCE , self . groups_metadata ()) , & * self . interpolator , & * self . traversable , self . groups_metadata ()) ; return :: bean_dispatch_core :: BeanValidator :: validate_value (& crate :: com :: acme :: _ManagerValidator :: INSTANCE , & context , bean_type , property_name , value , groups) ; } if bean_type == < crate :: com :: acme :: Employee as :: bean_dispatch_core :: BeanClass > :: CLASS { let context = :: bean_dispatch_core :: ValidationContext :: new (bean_type , None , :: bean_dispatch_core :: BeanValidator :: constraints (& crate :: com :: acme :: _EmployeeValidator :: INSTANCE , self . groups_metadata ()) , & * self . interpolator , & * self . traversable , self . groups_metadata ()) ; return :: bean_dispatch_core :: BeanValidator :: validate_value (& crate :: com :: acme :: _EmployeeValidator :: INSTANCE , & context , bean_type , property_name , value , groups) ; } Err (:: bean_dispatch_core :: ValidationError :: UnsupportedType { found : bean_type . name () , supported : Self :: SUPPORTED_TYPES }) } # [doc = r" Constraint descriptor of `clazz`."] pub fn constraints_for_class (& self , clazz : & 'static :: bean_dispatch_core :: Class) -> :: std :: result :: Result < & 'static :: bean_dispatch_core :: BeanDescriptor , :: bean_dispatch_core :: ValidationError > { if clazz == < crate :: com :: acme :: Manager as :: bean_dispatch_core :: BeanClass > :: CLASS { return Ok (:: bean_dispatch_core :: BeanValidator :: constraints (& crate :: com :: acme :: _ManagerValidator :: INSTANCE , self . groups_metadata ())) ; } if clazz == < crate :: com :: acme :: Employee as :: bean_dispatch_core :: BeanClass > :: CLASS { return Ok (:: bean_dispatch_core :: BeanValidator :: constraints (& crate :: com :: acme :: _EmployeeValidator :: INSTANCE , self . groups_metadata ())) ; } Err (:: bean_dispatch_core :: ValidationError :: UnsupportedType { found : clazz . name () , supported : Self :: SUPPORTED_TYPES }) } # [doc = r" Read `property_name` from `object` through its generated accessor table."] pub fn get_property (& self , object : & dyn :: bean_dispatch_core :: Bean , property_name : & str) -> :: std :: result :: Result < :: std :: boxed :: Box < dyn :: std :: any :: Any > , :: bean_dispatch_core :: ValidationError > { if object . is_exactly (< crate :: com :: acme :: Manager as :: bean_dispatch_core :: BeanClass > :: CLASS) { if let Some (bean) = object . downcast_ref :: < crate :: com :: acme :: Manager > () { return match property_name { "active" => Ok (:: std :: boxed :: Box :: new (bean . is_active ()) as :: std :: boxed :: Box < dyn :: std :: any :: Any >) , "name" => Ok (:: std :: boxed :: Box :: new (bean . get_name ()) as :: std :: boxed :: Box < dyn :: std :: any :: Any >) , "reports" => Ok (:: std :: boxed :: Box :: new (bean . get_reports ()) as :: std :: boxed :: Box < dyn :: std :: any :: Any >) , "salary" => Ok (:: std :: boxed :: Box :: new (bean . get_salary ()) as :: std :: boxed :: Box < dyn :: std :: any :: Any >) , _ => Err (:: bean_dispatch_core :: ValidationError :: NoSuchProperty { class : < crate :: com :: acme :: Manager as :: bean_dispatch_core :: BeanClass > :: CLASS . name () , property : :: std :: string :: ToString :: to_string (property_name) }) , } ; } } if object . is_exactly (< crate :: com :: acme :: Employee as :: bean_dispatch_core :: BeanClass > :: CLASS) { if let Some (bean) = object . downcast_ref :: < crate :: com :: acme :: Employee > () { return match property_name { "active" => Ok (:: std :: boxed :: Box :: new (bean . is_active ()) as :: std :: boxed :: Box < dyn :: std :: any :: Any >) , "name" => Ok (:: std :: boxed :: Box :: new (bean . get_name ()) as :: std :: boxed :: Box < dyn :: std :: any :: Any >) , _ => Err (:: bean_dispatch_core :: ValidationError :: NoSuchProperty { class : < crate :: com :: acme :: Employee as :: bean_dispatch_core :: BeanClass > :: CLASS . name () , property : :: std :: string :: ToString :: to_string (property_name) }) , } ; } } Err (:: bean_dispatch_core :: ValidationError :: ClassNotReflected { class : object . class () . name () }) } } impl :: std :: default :: Default for AcmeValidator { fn default () -> Self { Self :: new () } }
