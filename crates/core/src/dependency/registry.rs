//! Entity-type constants and the static relationship registry.
//!
//! The registry is the declarative table behind dependency validation:
//! one [`RelationshipRule`] per (parent, dependent) pair, plus display
//! names, deactivation capability flags, and per-dependent message
//! templates. It is built once at startup, validated, and shared
//! read-only for the lifetime of the process.

use std::collections::HashMap;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Entity type constants
// ---------------------------------------------------------------------------

pub const ENTITY_COMPANIES: &str = "companies";
pub const ENTITY_SECTORS: &str = "sectors";
pub const ENTITY_USERS: &str = "users";
pub const ENTITY_SPECIALTIES: &str = "specialties";
pub const ENTITY_EQUIPMENT: &str = "equipment";
pub const ENTITY_SERVICE_ORDERS: &str = "service_orders";
pub const ENTITY_SERVICE_TEMPLATES: &str = "service_templates";
pub const ENTITY_TEMPLATE_CATEGORIES: &str = "template_categories";
pub const ENTITY_MAINTENANCE_ALERTS: &str = "maintenance_alerts";

/// The closed set of entity types known to the back office.
///
/// Registry construction rejects rules that reference anything else, so
/// a typo in the rule table is a startup failure rather than a silently
/// empty relationship.
pub const KNOWN_ENTITY_TYPES: &[&str] = &[
    ENTITY_COMPANIES,
    ENTITY_SECTORS,
    ENTITY_USERS,
    ENTITY_SPECIALTIES,
    ENTITY_EQUIPMENT,
    ENTITY_SERVICE_ORDERS,
    ENTITY_SERVICE_TEMPLATES,
    ENTITY_TEMPLATE_CATEGORIES,
    ENTITY_MAINTENANCE_ALERTS,
];

/// Check whether an entity type belongs to the known set.
pub fn is_known_entity_type(entity: &str) -> bool {
    KNOWN_ENTITY_TYPES.contains(&entity)
}

/// Entity types that support deactivation as an alternative to deletion.
///
/// These get a DEACTIVATE suggestion when their deletion is blocked.
const DEACTIVATABLE_ENTITY_TYPES: &[&str] = &[
    ENTITY_COMPANIES,
    ENTITY_SECTORS,
    ENTITY_USERS,
    ENTITY_SPECIALTIES,
    ENTITY_SERVICE_TEMPLATES,
];

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

/// Whether a relationship blocks deletion or is informative only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationshipKind {
    Blocking,
    Advisory,
}

/// One parent/dependent relationship.
///
/// `foreign_key` names the column on the dependent table holding the
/// parent's id. All fields are `'static` because the rule table is
/// compiled into the binary.
#[derive(Debug, Clone, Copy)]
pub struct RelationshipRule {
    pub parent_entity: &'static str,
    pub dependent_entity: &'static str,
    pub foreign_key: &'static str,
    pub display_name: &'static str,
    pub kind: RelationshipKind,
}

impl RelationshipRule {
    const fn blocking(
        parent_entity: &'static str,
        dependent_entity: &'static str,
        foreign_key: &'static str,
        display_name: &'static str,
    ) -> Self {
        Self {
            parent_entity,
            dependent_entity,
            foreign_key,
            display_name,
            kind: RelationshipKind::Blocking,
        }
    }

    const fn advisory(
        parent_entity: &'static str,
        dependent_entity: &'static str,
        foreign_key: &'static str,
        display_name: &'static str,
    ) -> Self {
        Self {
            parent_entity,
            dependent_entity,
            foreign_key,
            display_name,
            kind: RelationshipKind::Advisory,
        }
    }
}

/// The full relationship table, in registration order.
///
/// Registration order is load-bearing: it fixes the order of findings
/// and suggestions in every validation response.
const DEFAULT_RULES: &[RelationshipRule] = &[
    // companies
    RelationshipRule::blocking(ENTITY_COMPANIES, ENTITY_SECTORS, "company_id", "Sectors"),
    RelationshipRule::blocking(ENTITY_COMPANIES, ENTITY_USERS, "company_id", "Users"),
    RelationshipRule::blocking(ENTITY_COMPANIES, ENTITY_EQUIPMENT, "company_id", "Equipment"),
    RelationshipRule::blocking(
        ENTITY_COMPANIES,
        ENTITY_SERVICE_ORDERS,
        "company_id",
        "Service orders",
    ),
    // sectors
    RelationshipRule::blocking(ENTITY_SECTORS, ENTITY_EQUIPMENT, "sector_id", "Equipment"),
    RelationshipRule::blocking(
        ENTITY_SECTORS,
        ENTITY_SERVICE_ORDERS,
        "sector_id",
        "Service orders",
    ),
    RelationshipRule::advisory(ENTITY_SECTORS, ENTITY_USERS, "sector_id", "Users"),
    // users
    RelationshipRule::blocking(
        ENTITY_USERS,
        ENTITY_SERVICE_ORDERS,
        "technician_id",
        "Service orders",
    ),
    // specialties
    RelationshipRule::blocking(
        ENTITY_SPECIALTIES,
        ENTITY_SERVICE_ORDERS,
        "specialty_id",
        "Service orders",
    ),
    RelationshipRule::advisory(ENTITY_SPECIALTIES, ENTITY_USERS, "specialty_id", "Users"),
    // equipment
    RelationshipRule::blocking(
        ENTITY_EQUIPMENT,
        ENTITY_SERVICE_ORDERS,
        "equipment_id",
        "Service orders",
    ),
    RelationshipRule::blocking(
        ENTITY_EQUIPMENT,
        ENTITY_MAINTENANCE_ALERTS,
        "equipment_id",
        "Maintenance alerts",
    ),
    // service templates
    RelationshipRule::advisory(
        ENTITY_SERVICE_TEMPLATES,
        ENTITY_SERVICE_ORDERS,
        "template_id",
        "Service orders",
    ),
    RelationshipRule::advisory(
        ENTITY_SERVICE_TEMPLATES,
        ENTITY_MAINTENANCE_ALERTS,
        "template_id",
        "Maintenance alerts",
    ),
    // template categories
    RelationshipRule::blocking(
        ENTITY_TEMPLATE_CATEGORIES,
        ENTITY_SERVICE_TEMPLATES,
        "category_id",
        "Service templates",
    ),
    // maintenance alerts
    RelationshipRule::advisory(
        ENTITY_MAINTENANCE_ALERTS,
        ENTITY_SERVICE_ORDERS,
        "alert_id",
        "Service orders",
    ),
];

/// Display labels for entity types (used when an entity appears as a
/// parent, or as a fallback for unconfigured dependents).
const DISPLAY_NAMES: &[(&str, &str)] = &[
    (ENTITY_COMPANIES, "Companies"),
    (ENTITY_SECTORS, "Sectors"),
    (ENTITY_USERS, "Users"),
    (ENTITY_SPECIALTIES, "Specialties"),
    (ENTITY_EQUIPMENT, "Equipment"),
    (ENTITY_SERVICE_ORDERS, "Service orders"),
    (ENTITY_SERVICE_TEMPLATES, "Service templates"),
    (ENTITY_TEMPLATE_CATEGORIES, "Template categories"),
    (ENTITY_MAINTENANCE_ALERTS, "Maintenance alerts"),
];

/// Per-dependent message templates. `{count}` is substituted client-side.
const MESSAGE_TEMPLATES: &[(&str, &str)] = &[
    (ENTITY_SECTORS, "{count} sector(s) still belong to this record"),
    (ENTITY_USERS, "{count} user(s) are still linked to this record"),
    (
        ENTITY_EQUIPMENT,
        "{count} piece(s) of equipment are still assigned to this record",
    ),
    (
        ENTITY_SERVICE_ORDERS,
        "{count} service order(s) still reference this record",
    ),
    (
        ENTITY_SERVICE_TEMPLATES,
        "{count} service template(s) use this category",
    ),
    (
        ENTITY_MAINTENANCE_ALERTS,
        "{count} maintenance alert(s) are tied to this record",
    ),
];

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// Immutable lookup table over the relationship rules.
///
/// Built once at startup via [`RelationshipRegistry::with_default_rules`]
/// and shared behind an `Arc`. Safe for unlimited concurrent readers.
#[derive(Debug)]
pub struct RelationshipRegistry {
    rules: Vec<RelationshipRule>,
    display_names: HashMap<&'static str, &'static str>,
    message_templates: HashMap<&'static str, &'static str>,
    deactivatable: &'static [&'static str],
}

impl RelationshipRegistry {
    /// Build a registry from an explicit rule slice, validating it.
    ///
    /// Fails with `CoreError::Validation` if a rule references an entity
    /// type outside [`KNOWN_ENTITY_TYPES`] or if a (parent, dependent)
    /// pair appears more than once.
    pub fn new(rules: &[RelationshipRule]) -> Result<Self, CoreError> {
        let mut seen: Vec<(&str, &str)> = Vec::with_capacity(rules.len());
        for rule in rules {
            if !is_known_entity_type(rule.parent_entity) {
                return Err(CoreError::Validation(format!(
                    "relationship rule references unknown parent entity '{}'",
                    rule.parent_entity
                )));
            }
            if !is_known_entity_type(rule.dependent_entity) {
                return Err(CoreError::Validation(format!(
                    "relationship rule references unknown dependent entity '{}'",
                    rule.dependent_entity
                )));
            }
            let pair = (rule.parent_entity, rule.dependent_entity);
            if seen.contains(&pair) {
                return Err(CoreError::Validation(format!(
                    "duplicate relationship rule for ({}, {})",
                    rule.parent_entity, rule.dependent_entity
                )));
            }
            seen.push(pair);
        }

        Ok(Self {
            rules: rules.to_vec(),
            display_names: DISPLAY_NAMES.iter().copied().collect(),
            message_templates: MESSAGE_TEMPLATES.iter().copied().collect(),
            deactivatable: DEACTIVATABLE_ENTITY_TYPES,
        })
    }

    /// Build the registry from the compiled-in rule table.
    ///
    /// The default table is known-good; a failure here is a programming
    /// error surfaced at startup, so callers `expect` it in `main`.
    pub fn with_default_rules() -> Result<Self, CoreError> {
        Self::new(DEFAULT_RULES)
    }

    /// Every registered rule, in registration order.
    pub fn rules(&self) -> &[RelationshipRule] {
        &self.rules
    }

    /// All rules whose parent matches, in registration order.
    ///
    /// Unknown parents yield an empty iterator: an entity with no
    /// registered relationships simply has no dependents.
    pub fn rules_for<'a>(
        &'a self,
        parent_entity: &'a str,
    ) -> impl Iterator<Item = &'a RelationshipRule> + 'a {
        self.rules
            .iter()
            .filter(move |r| r.parent_entity == parent_entity)
    }

    /// The single rule for a (parent, dependent) pair, if registered.
    pub fn rule_for_pair(
        &self,
        parent_entity: &str,
        dependent_entity: &str,
    ) -> Option<&RelationshipRule> {
        self.rules
            .iter()
            .find(|r| r.parent_entity == parent_entity && r.dependent_entity == dependent_entity)
    }

    /// Display label for an entity type, falling back to the raw
    /// identifier when none is configured.
    pub fn display_name<'a>(&self, entity: &'a str) -> &'a str {
        self.display_names.get(entity).copied().unwrap_or(entity)
    }

    /// Whether the entity type supports deactivation instead of deletion.
    pub fn supports_deactivation(&self, entity: &str) -> bool {
        self.deactivatable.contains(&entity)
    }

    /// Message template for a dependent entity, with the documented
    /// fallback when none is configured.
    pub fn message_template(&self, dependent_entity: &str) -> String {
        match self.message_templates.get(dependent_entity) {
            Some(template) => (*template).to_string(),
            None => format!(
                "{}: {{count}} linked record(s)",
                self.display_name(dependent_entity)
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rules_build_cleanly() {
        let registry = RelationshipRegistry::with_default_rules().unwrap();
        assert!(registry.rules_for(ENTITY_COMPANIES).count() >= 4);
    }

    #[test]
    fn rules_for_preserves_registration_order() {
        let registry = RelationshipRegistry::with_default_rules().unwrap();
        let dependents: Vec<&str> = registry
            .rules_for(ENTITY_COMPANIES)
            .map(|r| r.dependent_entity)
            .collect();
        assert_eq!(
            dependents,
            vec![
                ENTITY_SECTORS,
                ENTITY_USERS,
                ENTITY_EQUIPMENT,
                ENTITY_SERVICE_ORDERS
            ]
        );
    }

    #[test]
    fn unknown_parent_yields_no_rules() {
        let registry = RelationshipRegistry::with_default_rules().unwrap();
        assert_eq!(registry.rules_for("widgets").count(), 0);
    }

    #[test]
    fn duplicate_pair_rejected() {
        let rules = [
            RelationshipRule::blocking(ENTITY_COMPANIES, ENTITY_SECTORS, "company_id", "Sectors"),
            RelationshipRule::advisory(ENTITY_COMPANIES, ENTITY_SECTORS, "company_id", "Sectors"),
        ];
        assert!(RelationshipRegistry::new(&rules).is_err());
    }

    #[test]
    fn unknown_entity_in_rule_rejected() {
        let rules = [RelationshipRule::blocking(
            ENTITY_COMPANIES,
            "widgets",
            "company_id",
            "Widgets",
        )];
        assert!(RelationshipRegistry::new(&rules).is_err());
    }

    #[test]
    fn display_name_falls_back_to_identifier() {
        let registry = RelationshipRegistry::with_default_rules().unwrap();
        assert_eq!(registry.display_name(ENTITY_SECTORS), "Sectors");
        assert_eq!(registry.display_name("widgets"), "widgets");
    }

    #[test]
    fn deactivation_capability_matches_configuration() {
        let registry = RelationshipRegistry::with_default_rules().unwrap();
        assert!(registry.supports_deactivation(ENTITY_COMPANIES));
        assert!(registry.supports_deactivation(ENTITY_SERVICE_TEMPLATES));
        assert!(!registry.supports_deactivation(ENTITY_EQUIPMENT));
        assert!(!registry.supports_deactivation(ENTITY_TEMPLATE_CATEGORIES));
    }

    #[test]
    fn message_template_fallback_names_the_entity() {
        let registry = RelationshipRegistry::with_default_rules().unwrap();
        assert_eq!(
            registry.message_template(ENTITY_TEMPLATE_CATEGORIES),
            "Template categories: {count} linked record(s)"
        );
        assert!(registry
            .message_template(ENTITY_SERVICE_ORDERS)
            .contains("{count}"));
    }
}
