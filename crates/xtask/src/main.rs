use std::collections::BTreeMap;

use anyhow::Context;
use serde::Deserialize;

/// Crates each workspace member must never depend on.
const FORBIDDEN_DEPS: &[(&str, &[&str])] = &[
    ("armory-domain", &["armory-shared", "armory-admin"]),
    ("armory-shared", &["armory-admin"]),
];

#[derive(Debug, Deserialize)]
struct Metadata {
    packages: Vec<Package>,
}

#[derive(Debug, Deserialize)]
struct Package {
    name: String,
    dependencies: Vec<Dependency>,
}

#[derive(Debug, Deserialize)]
struct Dependency {
    name: String,
}

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("arch-check") => arch_check(),
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}"),
        None => anyhow::bail!("Usage: cargo xtask <command>\n\nCommands:\n  arch-check"),
    }
}

fn arch_check() -> anyhow::Result<()> {
    let output = std::process::Command::new("cargo")
        .args(["metadata", "--format-version", "1", "--no-deps"])
        .output()
        .context("running cargo metadata")?;

    if !output.status.success() {
        anyhow::bail!("cargo metadata failed")
    }

    let metadata: Metadata =
        serde_json::from_slice(&output.stdout).context("parsing cargo metadata output")?;

    let violations = layering_violations(&metadata);
    if !violations.is_empty() {
        for violation in &violations {
            eprintln!("arch-check: {violation}");
        }
        anyhow::bail!("{} layering violation(s)", violations.len());
    }

    println!("arch-check: ok");
    Ok(())
}

fn layering_violations(metadata: &Metadata) -> Vec<String> {
    let deps_by_package: BTreeMap<&str, Vec<&str>> = metadata
        .packages
        .iter()
        .map(|p| {
            (
                p.name.as_str(),
                p.dependencies.iter().map(|d| d.name.as_str()).collect(),
            )
        })
        .collect();

    let mut violations = Vec::new();
    for (package, forbidden) in FORBIDDEN_DEPS {
        let Some(deps) = deps_by_package.get(package) else {
            continue;
        };
        for dep in deps {
            if forbidden.contains(dep) {
                violations.push(format!("{package} must not depend on {dep}"));
            }
        }
    }
    violations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(json: &str) -> Metadata {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn accepts_the_intended_layering() {
        let metadata = metadata(
            r#"{"packages": [
                {"name": "armory-domain", "dependencies": [{"name": "serde"}]},
                {"name": "armory-shared", "dependencies": [{"name": "serde_json"}]},
                {"name": "armory-admin", "dependencies": [
                    {"name": "armory-domain"}, {"name": "armory-shared"}
                ]}
            ]}"#,
        );

        assert!(layering_violations(&metadata).is_empty());
    }

    #[test]
    fn flags_upward_dependencies() {
        let metadata = metadata(
            r#"{"packages": [
                {"name": "armory-domain", "dependencies": [{"name": "armory-admin"}]},
                {"name": "armory-shared", "dependencies": [{"name": "armory-admin"}]}
            ]}"#,
        );

        assert_eq!(
            layering_violations(&metadata),
            vec![
                "armory-domain must not depend on armory-admin".to_string(),
                "armory-shared must not depend on armory-admin".to_string(),
            ]
        );
    }
}
