// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Shared unit-test fixtures: a small company model.
//!
//! ```text
//! Employee  <- Manager (reports: List<Employee>)
//! Department
//!   staff:       List<Employee>          (field + getter)
//!   byBadge:     Map<String, Employee>   (field)
//!   interns:     Employee[]              (field)
//!   head:        Manager                 (field + getter)
//!   rooms:       Room[]                  (field)
//!   contractors: Set<Contractor>         (getter only)
//! Strict = sequence [Default, Strict];  Audit extends Default
//! ```

use std::cell::RefCell;

use indexmap::IndexMap;

use crate::host::{
    BeanDescriptor, ClassDecl, ConstraintDecl, ConstraintEngine, DescriptorTable, EngineError,
    PropertyDescriptor, TypeName, TypeRef, TypeUniverse
};

fn class(name: &str) -> TypeRef {
    TypeRef::class(name)
}

fn list_of(name: &str) -> TypeRef {
    TypeRef::parameterized("java.util.List", vec![class(name)])
}

fn string() -> TypeRef {
    class("java.lang.String")
}

fn not_null() -> ConstraintDecl {
    ConstraintDecl::new("javax.validation.constraints.NotNull")
}

fn min() -> ConstraintDecl {
    ConstraintDecl::new("javax.validation.constraints.Min")
}

/// Host declarations of the company model.
pub(crate) fn company() -> TypeUniverse {
    TypeUniverse::with_platform_types()
        .with(
            ClassDecl::class("com.acme.Employee")
                .extends("java.lang.Object")
                .field("name", string())
                .field("active", TypeRef::primitive("boolean"))
                .getter("getName", string())
                .getter("isActive", TypeRef::primitive("boolean"))
        )
        .with(
            ClassDecl::class("com.acme.Manager")
                .extends("com.acme.Employee")
                .field("salary", TypeRef::primitive("long"))
                .field("reports", list_of("com.acme.Employee"))
                .getter("getSalary", TypeRef::primitive("long"))
                .getter("getReports", list_of("com.acme.Employee"))
        )
        .with(
            ClassDecl::class("com.acme.Department")
                .extends("java.lang.Object")
                .field("staff", list_of("com.acme.Employee"))
                .field(
                    "byBadge",
                    TypeRef::parameterized(
                        "java.util.Map",
                        vec![string(), class("com.acme.Employee")]
                    )
                )
                .field("interns", TypeRef::array(class("com.acme.Employee")))
                .field("head", class("com.acme.Manager"))
                .field("rooms", TypeRef::array(class("com.acme.Room")))
                .getter("getStaff", list_of("com.acme.Employee"))
                .getter("getHead", class("com.acme.Manager"))
                .getter(
                    "getContractors",
                    TypeRef::parameterized("java.util.Set", vec![class("com.acme.Contractor")])
                )
        )
        .with(
            ClassDecl::class("com.acme.Room")
                .field("number", TypeRef::primitive("int"))
                .getter("getNumber", TypeRef::primitive("int"))
        )
        .with(
            ClassDecl::class("com.acme.Contractor")
                .field("company", string())
                .getter("getCompany", string())
        )
        .with(
            ClassDecl::interface("com.acme.Strict").group_sequence(vec![
                TypeName::new("javax.validation.groups.Default"),
                TypeName::new("com.acme.Strict")
            ])
        )
        .with(ClassDecl::interface("com.acme.Audit").implements("javax.validation.groups.Default"))
}

/// Engine descriptors of the company model.
pub(crate) fn company_constraints() -> DescriptorTable {
    DescriptorTable::new()
        .with(
            BeanDescriptor::new("com.acme.Employee")
                .property(PropertyDescriptor::constrained("name", string(), vec![not_null()]))
        )
        .with(
            BeanDescriptor::new("com.acme.Manager")
                .property(PropertyDescriptor::constrained("name", string(), vec![not_null()]))
                .property(PropertyDescriptor::constrained(
                    "salary",
                    TypeRef::primitive("long"),
                    vec![min()]
                ))
                .property(PropertyDescriptor::cascaded("reports", list_of("com.acme.Employee")))
        )
        .with(
            BeanDescriptor::new("com.acme.Department")
                .property(PropertyDescriptor::cascaded("staff", list_of("com.acme.Employee")))
                .property(PropertyDescriptor::cascaded("head", class("com.acme.Manager")))
                .property(PropertyDescriptor::cascaded(
                    "rooms",
                    TypeRef::array(class("com.acme.Room"))
                ))
                .property(PropertyDescriptor::cascaded(
                    "contractors",
                    TypeRef::parameterized("java.util.Set", vec![class("com.acme.Contractor")])
                ))
        )
        .with(
            BeanDescriptor::new("com.acme.Room").property(PropertyDescriptor::constrained(
                "number",
                TypeRef::primitive("int"),
                vec![min()]
            ))
        )
        .with(
            BeanDescriptor::new("com.acme.Contractor")
                .property(PropertyDescriptor::constrained("company", string(), vec![not_null()]))
        )
}

/// Engine wrapper that counts descriptor fetches per type.
pub(crate) struct CountingEngine {
    inner:   DescriptorTable,
    fetches: RefCell<IndexMap<TypeName, usize>>
}

impl CountingEngine {
    pub(crate) fn new(inner: DescriptorTable) -> Self {
        Self {
            inner,
            fetches: RefCell::new(IndexMap::new())
        }
    }

    pub(crate) fn fetches(&self, ty: &TypeName) -> usize {
        self.fetches.borrow().get(ty).copied().unwrap_or(0)
    }
}

impl ConstraintEngine for CountingEngine {
    fn descriptor_for(&self, ty: &TypeName) -> Result<BeanDescriptor, EngineError> {
        *self.fetches.borrow_mut().entry(ty.clone()).or_insert(0) += 1;
        self.inner.descriptor_for(ty)
    }

    fn is_constrained(&self, ty: &TypeName) -> bool {
        self.inner.is_constrained(ty)
    }
}
