use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserRole {
    #[serde(rename = "O2 Admin")]
    O2Admin,
    #[serde(rename = "Partner Admin")]
    PartnerAdmin,
    #[serde(rename = "O2 Super Admin")]
    O2SuperAdmin,
    #[serde(rename = "O2 Partner Manager")]
    O2PartnerManager,
}

impl UserRole {
    pub const ALL: [UserRole; 4] = [
        UserRole::O2Admin,
        UserRole::PartnerAdmin,
        UserRole::O2SuperAdmin,
        UserRole::O2PartnerManager,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::O2Admin => "O2 Admin",
            UserRole::PartnerAdmin => "Partner Admin",
            UserRole::O2SuperAdmin => "O2 Super Admin",
            UserRole::O2PartnerManager => "O2 Partner Manager",
        }
    }

    /// Platform operators allowed to approve products and inject orders.
    pub fn is_o2_admin(&self) -> bool {
        matches!(self, UserRole::O2Admin | UserRole::O2SuperAdmin)
    }

    pub fn navigation(&self) -> Vec<NavItem> {
        let mut items = vec![
            NavItem::new(Section::Dashboard, "/dashboard", "Dashboard"),
            NavItem::new(Section::Products, "/products", "Products"),
            NavItem::new(Section::Orders, "/orders", "Orders"),
        ];

        match self {
            UserRole::O2SuperAdmin => items.extend([
                NavItem::new(Section::Financials, "/financials", "Financials"),
                NavItem::new(Section::Partners, "/partners", "Partners"),
                NavItem::new(Section::Settings, "/settings", "Settings"),
            ]),
            UserRole::O2PartnerManager => items.extend([
                NavItem::new(Section::Partners, "/partners", "Partners"),
                NavItem::new(Section::Settings, "/settings", "Settings"),
            ]),
            UserRole::O2Admin => {
                items.push(NavItem::new(Section::Settings, "/settings", "Settings"))
            }
            UserRole::PartnerAdmin => items.extend([
                NavItem::new(Section::Financials, "/financials", "My Financials"),
                NavItem::new(Section::SubPartners, "/sub-partners", "My Sub-partners"),
                NavItem::new(Section::Settings, "/settings", "Settings"),
                NavItem::new(Section::ApiAutomation, "/api", "API & Automation"),
            ]),
        }

        items
    }

    pub fn can_access(&self, section: Section) -> bool {
        self.navigation().iter().any(|item| item.section == section)
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Dashboard,
    Products,
    Orders,
    Financials,
    Partners,
    SubPartners,
    Settings,
    ApiAutomation,
}

#[derive(Debug, Clone, Serialize)]
pub struct NavItem {
    pub section: Section,
    pub path: &'static str,
    pub label: &'static str,
}

impl NavItem {
    fn new(section: Section, path: &'static str, label: &'static str) -> Self {
        Self { section, path, label }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MockUser {
    pub id: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub role: UserRole,
    pub company_name: &'static str,
    pub partner_id: Option<&'static str>,
}

/// The fixed account that a role selection logs in as.
pub fn mock_user(role: UserRole) -> MockUser {
    match role {
        UserRole::O2Admin => MockUser {
            id: "1",
            name: "Sarah Johnson",
            email: "sarah.johnson@o2.com",
            role,
            company_name: "O2 Business Solutions",
            partner_id: None,
        },
        UserRole::PartnerAdmin => MockUser {
            id: "2",
            name: "Michael Chen",
            email: "michael.chen@techpartner.com",
            role,
            company_name: "TechPartner Solutions",
            partner_id: Some("PART-001"),
        },
        UserRole::O2SuperAdmin => MockUser {
            id: "3",
            name: "Emma Williams",
            email: "emma.williams@o2.com",
            role,
            company_name: "O2 Business Solutions",
            partner_id: None,
        },
        UserRole::O2PartnerManager => MockUser {
            id: "4",
            name: "David Rodriguez",
            email: "david.rodriguez@o2.com",
            role,
            company_name: "O2 Business Solutions",
            partner_id: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections(role: UserRole) -> Vec<Section> {
        role.navigation().into_iter().map(|i| i.section).collect()
    }

    #[test]
    fn every_role_starts_with_base_items() {
        for role in UserRole::ALL {
            assert_eq!(
                &sections(role)[..3],
                &[Section::Dashboard, Section::Products, Section::Orders]
            );
        }
    }

    #[test]
    fn o2_admin_only_gets_settings_on_top() {
        assert_eq!(
            sections(UserRole::O2Admin),
            vec![Section::Dashboard, Section::Products, Section::Orders, Section::Settings]
        );
        assert!(!UserRole::O2Admin.can_access(Section::Partners));
        assert!(!UserRole::O2Admin.can_access(Section::Financials));
    }

    #[test]
    fn partner_admin_sees_own_sections() {
        let nav = UserRole::PartnerAdmin.navigation();
        let labels: Vec<_> = nav.iter().map(|i| i.label).collect();
        assert_eq!(
            labels,
            vec![
                "Dashboard",
                "Products",
                "Orders",
                "My Financials",
                "My Sub-partners",
                "Settings",
                "API & Automation"
            ]
        );
        assert!(!UserRole::PartnerAdmin.can_access(Section::Partners));
    }

    #[test]
    fn partner_manager_cannot_reach_financials() {
        assert!(UserRole::O2PartnerManager.can_access(Section::Partners));
        assert!(!UserRole::O2PartnerManager.can_access(Section::Financials));
        assert!(!UserRole::O2PartnerManager.can_access(Section::SubPartners));
    }

    #[test]
    fn super_admin_gets_financials_and_partners() {
        assert!(UserRole::O2SuperAdmin.can_access(Section::Financials));
        assert!(UserRole::O2SuperAdmin.can_access(Section::Partners));
        assert!(!UserRole::O2SuperAdmin.can_access(Section::ApiAutomation));
    }

    #[test]
    fn role_names_round_trip_through_serde() {
        let json = serde_json::to_string(&UserRole::O2PartnerManager).unwrap();
        assert_eq!(json, "\"O2 Partner Manager\"");
        let role: UserRole = serde_json::from_str("\"Partner Admin\"").unwrap();
        assert_eq!(role, UserRole::PartnerAdmin);
        assert!(serde_json::from_str::<UserRole>("\"Guest\"").is_err());
    }

    #[test]
    fn only_partner_admin_is_linked_to_a_partner() {
        for role in UserRole::ALL {
            assert_eq!(mock_user(role).partner_id.is_some(), role == UserRole::PartnerAdmin);
        }
    }
}
