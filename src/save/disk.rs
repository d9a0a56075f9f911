use anyhow::Context;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::Path;
use std::path::PathBuf;

/// for fit artifacts that can be written to
/// and loaded from disk as JSON, so a later
/// fit over the same data can skip the work.
pub trait Disk: Sized + Serialize + DeserializeOwned {
    /// Returns the name of the artifact, used as its file stem
    fn name() -> &'static str;
    /// path to file on disk
    fn path(dir: &Path) -> PathBuf {
        dir.join(format!("{}.json", Self::name()))
    }
    /// check if file exists on disk
    fn done(dir: &Path) -> bool {
        Self::path(dir).is_file()
    }
    /// read from disk
    fn load(dir: &Path) -> anyhow::Result<Self> {
        let ref path = Self::path(dir);
        let file = std::fs::File::open(path)
            .with_context(|| format!("open {}", path.display()))?;
        serde_json::from_reader(std::io::BufReader::new(file))
            .with_context(|| format!("parse {}", path.display()))
    }
    /// write to disk
    fn save(&self, dir: &Path) -> anyhow::Result<()> {
        std::fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
        let ref path = Self::path(dir);
        let file = std::fs::File::create(path)
            .with_context(|| format!("create {}", path.display()))?;
        serde_json::to_writer(std::io::BufWriter::new(file), self)
            .with_context(|| format!("write {}", path.display()))
    }
}

/// Load the artifact from `dir` when it is there and parses,
/// otherwise build it with `grow` and try to write it back.
/// Without a directory this is just `grow()`. Cache trouble
/// is logged and never fails the fit.
pub fn cached<T, F>(dir: Option<&Path>, grow: F) -> T
where
    T: Disk,
    F: FnOnce() -> T,
{
    let Some(dir) = dir else {
        return grow();
    };
    if T::done(dir) {
        match T::load(dir) {
            Ok(artifact) => {
                log::info!("loaded {} from {}", T::name(), T::path(dir).display());
                return artifact;
            }
            Err(e) => log::warn!("ignoring cached {}: {:#}", T::name(), e),
        }
    }
    let artifact = grow();
    match artifact.save(dir) {
        Ok(()) => log::info!("saved {} to {}", T::name(), T::path(dir).display()),
        Err(e) => log::warn!("could not cache {}: {:#}", T::name(), e),
    }
    artifact
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Weight;
    use crate::cards::Card;
    use crate::scoring::Graph;
    use crate::scoring::Popularity;

    #[test]
    fn grow_then_load() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut graph = Graph::default();
        graph.update(Card::new(1), Card::new(2), 3.0);
        let grown = cached(Some(dir.path()), || graph.clone());
        assert!(Graph::done(dir.path()));
        let loaded = cached(Some(dir.path()), Graph::default);
        assert_eq!(grown, loaded);
        assert_eq!(loaded.weight(Card::new(2), Card::new(1)), 3.0);
    }

    #[test]
    fn corrupt_cache_is_regrown() {
        let dir = tempfile::tempdir().expect("temp dir");
        std::fs::write(Popularity::path(dir.path()), "not json").expect("write");
        let popularity = cached(Some(dir.path()), || {
            [(Card::new(5), 1.0 as Weight)].into_iter().collect::<Popularity>()
        });
        assert_eq!(popularity.get(Card::new(5)), 1.0);
        assert_eq!(Popularity::load(dir.path()).expect("rewritten"), popularity);
    }

    #[test]
    fn no_directory_no_files() {
        let popularity = cached(None, Popularity::default);
        assert!(popularity.is_empty());
    }
}
