// @generated

pub mod profile;
