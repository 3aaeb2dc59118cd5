pub(crate) mod apply;
pub(crate) mod batch;
pub(crate) mod kind;
pub(crate) mod recipe;
