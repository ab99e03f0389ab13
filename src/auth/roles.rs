use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use tracing::debug;

/// Roles recognized by the view router. The externally supplied role string
/// is parsed into this closed enumeration; anything else falls into `Other`.
#[derive(Clone, Debug, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum UserRole {
    SupervisorGeral,
    Admin,
    GestorAlmoxarifado,
    #[strum(default)]
    Other(String),
}

/// Profile shape supplied by the external auth provider. The role field is
/// optional; an absent role is a normal case, not an error.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub role: Option<String>,
}

/// The two order-management views a profile can resolve to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ManagementView {
    /// Scoped view for general supervisors.
    Supervisor,
    /// Full management view: admins, warehouse managers, and any profile
    /// with an unrecognized or unset role.
    FullManagement,
}

/// Selects the view for a profile.
///
/// `supervisor_geral` is the only discriminant that routes to the
/// supervisor view; every other value, including an unset role, routes to
/// full management.
pub fn select_view(profile: &UserProfile) -> ManagementView {
    match profile.role.as_deref().and_then(|raw| raw.parse::<UserRole>().ok()) {
        Some(UserRole::SupervisorGeral) => ManagementView::Supervisor,
        Some(UserRole::Admin) | Some(UserRole::GestorAlmoxarifado) => ManagementView::FullManagement,
        Some(UserRole::Other(raw)) => {
            debug!(role = %raw, "unrecognized role, routing to full management view");
            ManagementView::FullManagement
        }
        None => ManagementView::FullManagement,
    }
}
