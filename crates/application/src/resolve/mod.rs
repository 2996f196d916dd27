//! Environment resolution
//!
//! The final join: each declared module instance is matched against the
//! catalog by its derived identifier and decorated with status from the
//! injected provider. Pure given its three inputs; the caller memoizes
//! across invocations if it wants to.

use tflens_domain::{
    EnvironmentMetadata, ModuleDefinition, ResolvedEnvironment, ResolvedModule, derive_module_id,
};

use crate::ports::StatusProvider;

/// Resolves every environment against the catalog and status provider.
///
/// The module identifier is the last non-empty segment of the instance's
/// source reference, falling back to the instance name. An identifier
/// matching no catalog entry leaves `definition` unset; the module is
/// still returned. Duplicate catalog ids are not deduplicated; the first
/// match wins.
#[must_use]
pub fn resolve_environments(
    environments: &[EnvironmentMetadata],
    catalog: &[ModuleDefinition],
    provider: &dyn StatusProvider,
) -> Vec<ResolvedEnvironment> {
    environments
        .iter()
        .map(|environment| ResolvedEnvironment {
            id: environment.id.clone(),
            path: environment.path.clone(),
            modules: environment
                .modules
                .iter()
                .map(|instance| {
                    let module_id =
                        derive_module_id(instance.source_ref.as_deref(), &instance.name);
                    let definition = catalog
                        .iter()
                        .find(|definition| definition.id == module_id)
                        .cloned();
                    let status = provider.status(&module_id);
                    ResolvedModule {
                        instance: instance.clone(),
                        module_id,
                        definition,
                        status,
                    }
                })
                .collect(),
            variables: environment.variables.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use tflens_domain::{Attributes, HealthState, ModuleInstance, ModuleStatus, VariableSpec};

    struct FixedStatus;

    impl StatusProvider for FixedStatus {
        fn status(&self, module_id: &str) -> ModuleStatus {
            ModuleStatus::new(
                HealthState::Healthy,
                Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).single().unwrap_or_default(),
                format!("checked {module_id}"),
            )
        }
    }

    fn instance(name: &str, source_ref: Option<&str>) -> ModuleInstance {
        ModuleInstance {
            name: name.to_string(),
            source_ref: source_ref.map(ToString::to_string),
            attributes: Attributes::new(),
            raw_body: String::new(),
        }
    }

    fn environment(id: &str, modules: Vec<ModuleInstance>) -> EnvironmentMetadata {
        EnvironmentMetadata {
            id: id.to_string(),
            path: format!("envs/{id}/main.tf"),
            modules,
            variables: vec![VariableSpec::new("region", None, None, None)],
        }
    }

    fn vpc_definition() -> ModuleDefinition {
        ModuleDefinition {
            id: "vpc".to_string(),
            path: "modules/vpc/variables.tf".to_string(),
            variables: vec![VariableSpec::new("cidr", None, Some("string".to_string()), None)],
        }
    }

    #[test]
    fn test_module_id_prefers_source_ref_segment() {
        let environments = vec![environment(
            "dev",
            vec![instance("net", Some("../../modules/vpc"))],
        )];

        let resolved = resolve_environments(&environments, &[vpc_definition()], &FixedStatus);
        assert_eq!(resolved[0].modules[0].module_id, "vpc");
    }

    #[test]
    fn test_module_id_falls_back_to_instance_name() {
        let environments = vec![environment("dev", vec![instance("net", None)])];

        let resolved = resolve_environments(&environments, &[], &FixedStatus);
        assert_eq!(resolved[0].modules[0].module_id, "net");
    }

    #[test]
    fn test_two_environments_share_one_definition() {
        let environments = vec![
            environment("dev", vec![instance("net", Some("../../modules/vpc"))]),
            environment("prod", vec![instance("net", Some("../../modules/vpc"))]),
        ];

        let resolved = resolve_environments(&environments, &[vpc_definition()], &FixedStatus);
        let dev_definition = resolved[0].modules[0].definition.as_ref();
        let prod_definition = resolved[1].modules[0].definition.as_ref();
        assert_eq!(dev_definition, prod_definition);
        assert_eq!(dev_definition.map(|definition| definition.id.as_str()), Some("vpc"));
    }

    #[test]
    fn test_unknown_module_resolves_without_definition() {
        let environments = vec![environment(
            "dev",
            vec![instance("ghost", Some("../../modules/ghost"))],
        )];

        let resolved = resolve_environments(&environments, &[vpc_definition()], &FixedStatus);
        let module = &resolved[0].modules[0];
        assert_eq!(module.module_id, "ghost");
        assert_eq!(module.definition, None);
        assert_eq!(module.status.status, HealthState::Healthy);
    }

    #[test]
    fn test_duplicate_catalog_ids_first_match_wins() {
        let mut duplicate = vpc_definition();
        duplicate.path = "legacy/vpc/variables.tf".to_string();
        duplicate.variables.clear();
        let catalog = vec![vpc_definition(), duplicate];

        let environments = vec![environment(
            "dev",
            vec![instance("net", Some("../../modules/vpc"))],
        )];

        let resolved = resolve_environments(&environments, &catalog, &FixedStatus);
        let definition = resolved[0].modules[0]
            .definition
            .as_ref()
            .map(|definition| definition.path.as_str());
        assert_eq!(definition, Some("modules/vpc/variables.tf"));
    }

    #[test]
    fn test_status_is_queried_by_module_id() {
        let environments = vec![environment(
            "dev",
            vec![instance("net", Some("../../modules/vpc"))],
        )];

        let resolved = resolve_environments(&environments, &[vpc_definition()], &FixedStatus);
        assert_eq!(resolved[0].modules[0].status.summary, "checked vpc");
    }

    #[test]
    fn test_environment_fields_carry_over() {
        let environments = vec![environment("dev", vec![])];

        let resolved = resolve_environments(&environments, &[], &FixedStatus);
        assert_eq!(resolved[0].id, "dev");
        assert_eq!(resolved[0].path, "envs/dev/main.tf");
        assert_eq!(resolved[0].variables.len(), 1);
        assert!(resolved[0].modules.is_empty());
    }
}
