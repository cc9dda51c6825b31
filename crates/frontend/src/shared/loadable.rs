use std::fmt::Display;

/// Remote data together with its fetch status.
///
/// Only [`Loadable::Loaded`] counts as usable data. After a failed refresh the
/// previous value is kept as `stale` for display but never returned by
/// [`Loadable::ready`].
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Loadable<T> {
    #[default]
    NotLoaded,
    Loading {
        stale: Option<T>,
    },
    Loaded(T),
    Unavailable {
        error: String,
        stale: Option<T>,
    },
}

impl<T> Loadable<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            Loadable::Loaded(value) => Some(value),
            _ => None,
        }
    }

    /// Latest value seen, fresh or stale
    pub fn last_known(&self) -> Option<&T> {
        match self {
            Loadable::Loaded(value) => Some(value),
            Loadable::Loading { stale } | Loadable::Unavailable { stale, .. } => stale.as_ref(),
            Loadable::NotLoaded => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Loadable::Loading { .. })
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Loadable::Unavailable { error, .. } => Some(error),
            _ => None,
        }
    }

    pub fn start(&mut self) {
        let stale = std::mem::take(self).into_last_known();
        *self = Loadable::Loading { stale };
    }

    pub fn resolve<E: Display>(&mut self, result: Result<T, E>) {
        *self = match result {
            Ok(value) => Loadable::Loaded(value),
            Err(error) => Loadable::Unavailable {
                error: error.to_string(),
                stale: std::mem::take(self).into_last_known(),
            },
        };
    }

    pub fn into_last_known(self) -> Option<T> {
        match self {
            Loadable::Loaded(value) => Some(value),
            Loadable::Loading { stale } | Loadable::Unavailable { stale, .. } => stale,
            Loadable::NotLoaded => None,
        }
    }
}
