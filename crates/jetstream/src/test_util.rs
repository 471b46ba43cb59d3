use serde::Deserialize;

/// A recorded broker reply under `tests/fixtures`.
#[derive(Debug, Deserialize)]
pub struct Fixture {
    pub reply: serde_json::Value,
}

pub fn load_fixture(name: &str) -> Fixture {
    let path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(format!("{name}.json"));
    let data = std::fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read fixture {name}: {err}"));
    serde_json::from_str(&data)
        .unwrap_or_else(|err| panic!("failed to parse fixture {name}: {err}"))
}
