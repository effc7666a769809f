//! Per-application directory resolution following the XDG base-directory
//! conventions.
use std::fs;
use std::path::PathBuf;

/// Resolve the cache directory for `app` without touching the filesystem.
///
/// Uses `$XDG_CACHE_HOME/<app>`, falling back to `$HOME/.cache/<app>` (or
/// `%USERPROFILE%\.cache\<app>`). Returns `None` if none of them is set.
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use dlo::config::paths::cache_dir_from;
///
/// let dir = cache_dir_from(
///     |key| (key == "HOME").then(|| "/home/ada".to_string()),
///     "dlo",
/// );
/// assert_eq!(dir, Some(PathBuf::from("/home/ada/.cache/dlo")));
/// ```
pub fn cache_dir_from(lookup: impl Fn(&str) -> Option<String>, app: &str) -> Option<PathBuf> {
    let set = |key: &str| lookup(key).filter(|value| !value.is_empty());
    let base = set("XDG_CACHE_HOME").map(PathBuf::from).or_else(|| {
        set("HOME")
            .or_else(|| set("USERPROFILE"))
            .map(|home| PathBuf::from(home).join(".cache"))
    })?;
    Some(base.join(app))
}

/// Return the cache directory for `app`, creating it if needed.
#[must_use]
pub fn cache_dir(app: &str) -> Option<PathBuf> {
    let dir = cache_dir_from(|key| std::env::var(key).ok(), app)?;
    fs::create_dir_all(&dir).ok()?;
    Some(dir)
}

/// Return `<cache dir>/<app>.log`, creating the directory if needed.
#[must_use]
pub fn log_file_path(app: &str) -> Option<PathBuf> {
    Some(cache_dir(app)?.join(format!("{app}.log")))
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn env<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v).to_string())
        }
    }

    #[test]
    fn xdg_cache_home_wins() {
        let dir = cache_dir_from(
            env(&[("XDG_CACHE_HOME", "/xdg"), ("HOME", "/home/u")]),
            "app",
        );
        assert_eq!(dir, Some(PathBuf::from("/xdg/app")));
    }

    #[test]
    fn falls_back_to_home() {
        let dir = cache_dir_from(env(&[("HOME", "/home/u")]), "app");
        assert_eq!(dir, Some(PathBuf::from("/home/u/.cache/app")));
    }

    #[test]
    fn empty_xdg_is_ignored() {
        let dir = cache_dir_from(env(&[("XDG_CACHE_HOME", ""), ("HOME", "/home/u")]), "app");
        assert_eq!(dir, Some(PathBuf::from("/home/u/.cache/app")));
    }

    #[test]
    fn userprofile_is_last_resort() {
        let dir = cache_dir_from(env(&[("USERPROFILE", "/users/u")]), "app");
        assert_eq!(dir, Some(PathBuf::from("/users/u/.cache/app")));
    }

    #[test]
    fn nothing_set_yields_none() {
        assert_eq!(cache_dir_from(env(&[]), "app"), None);
    }
}
