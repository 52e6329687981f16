use crate::Result;
use failure::format_err;
use std::fmt::Display;

pub trait OptionExt<T> {
    fn context(self, context: impl Display + Send + Sync + 'static) -> Result<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn context(self, context: impl Display + Send + Sync + 'static) -> Result<T> {
        self.ok_or_else(|| format_err!("{}", context))
    }
}
