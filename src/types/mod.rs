// src/types/mod.rs
//! Shared data contract consumed by the selector and every renderer

pub mod cv_data;

pub use cv_data::{
    Achievement, Certification, CvData, Education, Experience, Language, PersonalInfo, Project,
    Reference,
};
