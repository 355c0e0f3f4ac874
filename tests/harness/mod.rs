#![allow(dead_code, unused_imports)]


pub(crate) use fake_gh::{FakeGh, FakeGhMode};
pub(crate) use test_context::TestContext;
