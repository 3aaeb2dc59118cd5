pub(crate) mod grayscale;
pub(crate) mod sepia;
pub(crate) mod sharpen;
