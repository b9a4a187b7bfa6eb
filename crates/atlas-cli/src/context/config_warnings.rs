/// Emit warnings for env var keys that look like config but will be ignored.
pub fn warn_misspelled_env() {
    for warning in collect_env_warnings(std::env::vars().map(|(key, _)| key)) {
        tracing::warn!("{warning}");
    }
}

fn collect_env_warnings<I>(keys: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    const SECTIONS: [&str; 2] = ["STORAGE", "GENERAL"];

    keys.into_iter()
        .filter_map(|key| {
            let rest = key.strip_prefix("ATLAS_")?;
            let section = SECTIONS.iter().find(|section| {
                rest.strip_prefix(**section)
                    .is_some_and(|tail| tail.starts_with('_') && !tail.starts_with("__"))
            })?;
            Some(format!(
                "{key} is ignored. Use double underscores between section and field (example: ATLAS_{section}__{})",
                &rest[section.len() + 1..]
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::collect_env_warnings;

    #[test]
    fn flags_single_underscore_section_keys() {
        let warnings = collect_env_warnings(vec!["ATLAS_STORAGE_DATA_DIR".to_string()]);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("ATLAS_STORAGE__DATA_DIR"));
    }

    #[test]
    fn ignores_well_formed_and_unrelated_keys() {
        let warnings = collect_env_warnings(vec![
            "ATLAS_STORAGE__DATA_DIR".to_string(),
            "ATLAS_GENERAL__START_PATH".to_string(),
            "ATLAS_LOG".to_string(),
            "PATH".to_string(),
        ]);
        assert!(warnings.is_empty());
    }
}
