// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generated `com.acme.AcmeValidator` compiled against the run-time crate.
//!
//! `tests/integration.rs` writes the generator output to
//! `tests/cases/generated/` before this case is built.

use std::any::Any;

use bean_dispatch_core::{
    Bean, BeanClass, BeanDescriptor, BeanValidator, Class, ConstraintViolation,
    GroupChainMetadata, ValidationContext, ValidationError
};

pub mod javax {
    pub mod validation {
        pub mod groups {
            use bean_dispatch_core::{BeanClass, Class};

            pub static DEFAULT: Class = Class::new("javax.validation.groups.Default", None, &[]);

            pub struct Default;

            impl BeanClass for Default {
                const CLASS: &'static Class = &DEFAULT;
            }
        }
    }
}

pub mod com {
    pub mod acme {
        use bean_dispatch_core::{Bean, BeanClass, Class};

        pub static EMPLOYEE: Class = Class::new("com.acme.Employee", None, &[]);
        pub static MANAGER: Class = Class::new("com.acme.Manager", Some(&EMPLOYEE), &[]);
        pub static DIRECTOR: Class = Class::new("com.acme.Director", Some(&MANAGER), &[]);
        pub static ROOM: Class = Class::new("com.acme.Room", None, &[]);

        #[derive(Clone)]
        pub struct Employee {
            pub name:   String,
            pub active: bool
        }

        impl Employee {
            pub fn get_name(&self) -> String {
                self.name.clone()
            }

            pub fn is_active(&self) -> bool {
                self.active
            }
        }

        impl Bean for Employee {
            fn class(&self) -> &'static Class {
                &EMPLOYEE
            }
        }

        impl BeanClass for Employee {
            const CLASS: &'static Class = &EMPLOYEE;
        }

        pub struct Manager {
            pub employee: Employee,
            pub salary:   i64,
            pub reports:  Vec<Employee>
        }

        impl Manager {
            pub fn get_name(&self) -> String {
                self.employee.get_name()
            }

            pub fn is_active(&self) -> bool {
                self.employee.is_active()
            }

            pub fn get_salary(&self) -> i64 {
                self.salary
            }

            pub fn get_reports(&self) -> Vec<Employee> {
                self.reports.clone()
            }
        }

        impl Bean for Manager {
            fn class(&self) -> &'static Class {
                &MANAGER
            }
        }

        impl BeanClass for Manager {
            const CLASS: &'static Class = &MANAGER;
        }

        /// Subclass of `Manager` without a branch of its own.
        pub struct Director;

        impl Bean for Director {
            fn class(&self) -> &'static Class {
                &DIRECTOR
            }
        }

        pub struct Room;

        impl Bean for Room {
            fn class(&self) -> &'static Class {
                &ROOM
            }
        }

        include!("../generated/com/acme/_EmployeeValidator.rs");
        include!("../generated/com/acme/_ManagerValidator.rs");
        include!("../generated/com/acme/AcmeValidator.rs");
    }
}

use com::acme::{AcmeValidator, Director, Employee, Manager, Room};

static EMPLOYEE_DESCRIPTOR: BeanDescriptor = BeanDescriptor {
    class:                  &com::acme::EMPLOYEE,
    constrained_properties: &["name"],
    bean_constrained:       true
};
static MANAGER_DESCRIPTOR: BeanDescriptor = BeanDescriptor {
    class:                  &com::acme::MANAGER,
    constrained_properties: &["reports", "salary"],
    bean_constrained:       true
};

/// Per-type validator that reports its own tag as the violation message.
macro_rules! tagged_validator {
    ($marker:ty, $tag:literal, $descriptor:expr) => {
        impl BeanValidator for $marker {
            fn constraints(&self, _groups: &GroupChainMetadata) -> &'static BeanDescriptor {
                $descriptor
            }

            fn validate(
                &self,
                context: &ValidationContext<'_>,
                _bean: &dyn Bean,
                _groups: &[&'static Class]
            ) -> Result<Vec<ConstraintViolation>, ValidationError> {
                Ok(vec![context.violation("", $tag)])
            }

            fn validate_property(
                &self,
                context: &ValidationContext<'_>,
                _bean: &dyn Bean,
                property_name: &str,
                _groups: &[&'static Class]
            ) -> Result<Vec<ConstraintViolation>, ValidationError> {
                Ok(vec![context.violation(property_name, $tag)])
            }

            fn validate_value(
                &self,
                context: &ValidationContext<'_>,
                _bean_class: &'static Class,
                property_name: &str,
                _value: &dyn Any,
                _groups: &[&'static Class]
            ) -> Result<Vec<ConstraintViolation>, ValidationError> {
                assert!(context.root_bean().is_none());
                Ok(vec![context.violation(property_name, $tag)])
            }
        }
    };
}

tagged_validator!(com::acme::_EmployeeValidator, "employee", &EMPLOYEE_DESCRIPTOR);
tagged_validator!(com::acme::_ManagerValidator, "manager", &MANAGER_DESCRIPTOR);

fn employee() -> Employee {
    Employee {
        name:   "Bob".to_string(),
        active: true
    }
}

fn manager() -> Manager {
    Manager {
        employee: Employee {
            name:   "Ada".to_string(),
            active: true
        },
        salary:   100,
        reports:  vec![employee()]
    }
}

fn main() {
    let validator = AcmeValidator::new();
    let default = <javax::validation::groups::Default as BeanClass>::CLASS;

    assert_eq!(
        AcmeValidator::SUPPORTED_TYPES,
        &["com.acme.Manager", "com.acme.Employee"]
    );

    let violations = validator.validate(&manager(), &[default]).unwrap();
    assert_eq!(violations[0].message, "manager");
    assert_eq!(violations[0].root_class, "com.acme.Manager");

    let violations = validator.validate(&employee(), &[default]).unwrap();
    assert_eq!(violations[0].message, "employee");
    assert_eq!(violations[0].root_class, "com.acme.Employee");

    let violations = validator.validate(&Director, &[default]).unwrap();
    assert_eq!(violations[0].message, "manager");
    assert_eq!(violations[0].root_class, "com.acme.Manager");

    assert_eq!(
        validator.validate(&Room, &[default]).unwrap_err(),
        ValidationError::UnsupportedType {
            found:     "com.acme.Room",
            supported: &["com.acme.Manager", "com.acme.Employee"]
        }
    );

    let violations = validator
        .validate_property(&Director, "salary", &[default])
        .unwrap();
    assert_eq!(violations[0].message, "manager");
    assert_eq!(violations[0].property_path, "salary");
    assert_eq!(violations[0].root_class, "com.acme.Manager");
    assert!(validator.validate_property(&Room, "number", &[]).is_err());

    let value = String::new();
    let violations = validator
        .validate_value(<Employee as BeanClass>::CLASS, "name", &value, &[])
        .unwrap();
    assert_eq!(violations[0].message, "employee");
    assert_eq!(
        validator
            .validate_value(&com::acme::DIRECTOR, "name", &value, &[])
            .unwrap_err(),
        ValidationError::UnsupportedType {
            found:     "com.acme.Director",
            supported: &["com.acme.Manager", "com.acme.Employee"]
        }
    );

    assert_eq!(
        validator
            .constraints_for_class(<Manager as BeanClass>::CLASS)
            .unwrap(),
        &MANAGER_DESCRIPTOR
    );
    assert_eq!(
        validator
            .constraints_for_class(<Employee as BeanClass>::CLASS)
            .unwrap(),
        &EMPLOYEE_DESCRIPTOR
    );
    assert!(validator.constraints_for_class(&com::acme::ROOM).is_err());

    let salary = validator.get_property(&manager(), "salary").unwrap();
    assert_eq!(salary.downcast_ref::<i64>(), Some(&100));
    let reports = validator.get_property(&manager(), "reports").unwrap();
    assert_eq!(reports.downcast_ref::<Vec<Employee>>().map(Vec::len), Some(1));
    let active = validator.get_property(&employee(), "active").unwrap();
    assert_eq!(active.downcast_ref::<bool>(), Some(&true));
    assert_eq!(
        validator
            .get_property(&manager(), "nonexistent")
            .err()
            .unwrap(),
        ValidationError::NoSuchProperty {
            class:    "com.acme.Manager",
            property: "nonexistent".to_string()
        }
    );
    assert_eq!(
        validator.get_property(&Director, "salary").err().unwrap(),
        ValidationError::ClassNotReflected {
            class: "com.acme.Director"
        }
    );

    let groups: Vec<&str> = validator
        .groups_metadata()
        .groups()
        .map(Class::name)
        .collect();
    assert_eq!(groups, vec!["javax.validation.groups.Default"]);
}
