use crate::error::{Result, TreeinfoError};
use crate::info_file::InfoFile;
use crate::model::Annotation;
use crate::paths;
use crate::store::InfoStore;

/// Trims annotation text and rejects what cannot live on a single info line.
pub fn normalize_text(text: &str) -> Result<String> {
    let text = text.trim();
    if text.is_empty() {
        return Err(TreeinfoError::Api("Annotation text cannot be empty".into()));
    }
    if text.contains('\n') || text.contains('\r') {
        return Err(TreeinfoError::Api(
            "Annotation text must fit on a single line".into(),
        ));
    }
    Ok(text.to_string())
}

/// Cleans a user-supplied target and makes sure it names an existing path inside
/// the root.
pub fn normalize_target<S: InfoStore>(store: &S, target: &str) -> Result<String> {
    let target = paths::clean(target);
    if target == ".." || target.starts_with("../") || target.starts_with('/') {
        return Err(TreeinfoError::Api(format!(
            "Path is outside the annotated tree: {}",
            target
        )));
    }
    if !store.path_exists(&target) {
        return Err(TreeinfoError::Api(format!("Path does not exist: {}", target)));
    }
    Ok(target)
}

/// Reads the info file holding `annotation`. The file was asked for by name, so
/// failing to read it is an error.
pub fn load_holder<S: InfoStore>(store: &S, annotation: &Annotation) -> Result<InfoFile> {
    let content = store
        .read_info_file(&annotation.source_file)?
        .ok_or_else(|| {
            TreeinfoError::Store(format!(
                "Info file disappeared: {}",
                annotation.source_file
            ))
        })?;
    Ok(InfoFile::parse(annotation.source_file.as_str(), &content))
}

/// Loads the holder of `annotation` and applies `edit` to it. An edit that finds
/// nothing to change means the file moved on since it was scanned.
pub fn edit_holder<S, F>(store: &S, annotation: &Annotation, edit: F) -> Result<InfoFile>
where
    S: InfoStore,
    F: FnOnce(&mut InfoFile) -> bool,
{
    let mut file = load_holder(store, annotation)?;
    if !edit(&mut file) {
        return Err(TreeinfoError::Api(format!(
            "Annotation for {} in {} changed on disk",
            annotation.target_path, annotation.source_file
        )));
    }
    Ok(file)
}

/// Writes a single info file back, deleting it when no annotations are left.
/// Returns true when the file was deleted.
pub fn save_file<S: InfoStore>(store: &S, file: &InfoFile) -> Result<bool> {
    if file.is_empty() {
        store.write_info_file(file.path(), "")?;
        Ok(true)
    } else {
        store.write_info_file(file.path(), &file.serialize())?;
        Ok(false)
    }
}
