use serde::Serialize;
use std::str::FromStr;

use crate::Error;

/// Where a committed URL should open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Disposition {
    /// Replace the current view.
    CurrentTab,
    /// Open a new view and focus it.
    NewForegroundTab,
    /// Open a new view without focusing it.
    NewBackgroundTab,
}

impl FromStr for Disposition {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "current" | "currentTab" => Ok(Disposition::CurrentTab),
            "foreground" | "newForegroundTab" => Ok(Disposition::NewForegroundTab),
            "background" | "newBackgroundTab" => Ok(Disposition::NewBackgroundTab),
            other => Err(Error::InvalidDisposition(other.to_string())),
        }
    }
}

/// Host navigation primitive.
pub trait Navigator {
    fn navigate(&mut self, url: &str, disposition: Disposition);
}

impl<F> Navigator for F
where
    F: FnMut(&str, Disposition),
{
    fn navigate(&mut self, url: &str, disposition: Disposition) {
        self(url, disposition)
    }
}
