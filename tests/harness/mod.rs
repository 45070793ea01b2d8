#![allow(dead_code, unused_imports)]

pub(crate) mod template_repository;
pub(crate) mod test_context;

pub(crate) use template_repository::TemplateRepository;
pub(crate) use test_context::TestContext;
