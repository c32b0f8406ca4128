//! The closed career-domain taxonomy

use std::fmt;

use serde::{Deserialize, Serialize};

/// One category in the fixed career-classification taxonomy.
///
/// Variants are declared in catalog order; the derived `Ord` therefore
/// sorts domains the way result lists are expected to be ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Domain {
    #[serde(rename = "Medicine & Healthcare")]
    MedicineHealthcare,
    #[serde(rename = "Engineering & Technology")]
    EngineeringTechnology,
    #[serde(rename = "Installation, Maintenance & Repair")]
    InstallationMaintenanceRepair,
    #[serde(rename = "Information Technology")]
    InformationTechnology,
    #[serde(rename = "Environmental & Biological Science")]
    EnvironmentalBiologicalScience,
    #[serde(rename = "Physical Science")]
    PhysicalScience,
    #[serde(rename = "Transportation & Material Moving")]
    TransportationMaterialMoving,
    #[serde(rename = "Business, Accounts & Finance")]
    BusinessAccountsFinance,
    #[serde(rename = "Management")]
    Management,
    #[serde(rename = "Sales")]
    Sales,
    #[serde(rename = "Arts, Design, Media & Communication")]
    ArtsDesignMediaCommunication,
    #[serde(rename = "Education, Training & Library")]
    EducationTrainingLibrary,
    #[serde(rename = "Community & Social Service")]
    CommunitySocialService,
    #[serde(rename = "Social Science")]
    SocialScience,
    #[serde(rename = "Office Support & Administration")]
    OfficeSupportAdministration,
    #[serde(rename = "Personal Care & Service")]
    PersonalCareService,
    #[serde(rename = "Law Enforcement & Protective Service")]
    LawEnforcementProtectiveService,
}

impl Domain {
    /// All domains in catalog order
    pub const ALL: [Domain; 17] = [
        Domain::MedicineHealthcare,
        Domain::EngineeringTechnology,
        Domain::InstallationMaintenanceRepair,
        Domain::InformationTechnology,
        Domain::EnvironmentalBiologicalScience,
        Domain::PhysicalScience,
        Domain::TransportationMaterialMoving,
        Domain::BusinessAccountsFinance,
        Domain::Management,
        Domain::Sales,
        Domain::ArtsDesignMediaCommunication,
        Domain::EducationTrainingLibrary,
        Domain::CommunitySocialService,
        Domain::SocialScience,
        Domain::OfficeSupportAdministration,
        Domain::PersonalCareService,
        Domain::LawEnforcementProtectiveService,
    ];

    /// Human-readable catalog name
    pub fn name(&self) -> &'static str {
        match self {
            Domain::MedicineHealthcare => "Medicine & Healthcare",
            Domain::EngineeringTechnology => "Engineering & Technology",
            Domain::InstallationMaintenanceRepair => "Installation, Maintenance & Repair",
            Domain::InformationTechnology => "Information Technology",
            Domain::EnvironmentalBiologicalScience => "Environmental & Biological Science",
            Domain::PhysicalScience => "Physical Science",
            Domain::TransportationMaterialMoving => "Transportation & Material Moving",
            Domain::BusinessAccountsFinance => "Business, Accounts & Finance",
            Domain::Management => "Management",
            Domain::Sales => "Sales",
            Domain::ArtsDesignMediaCommunication => "Arts, Design, Media & Communication",
            Domain::EducationTrainingLibrary => "Education, Training & Library",
            Domain::CommunitySocialService => "Community & Social Service",
            Domain::SocialScience => "Social Science",
            Domain::OfficeSupportAdministration => "Office Support & Administration",
            Domain::PersonalCareService => "Personal Care & Service",
            Domain::LawEnforcementProtectiveService => "Law Enforcement & Protective Service",
        }
    }

    /// Look up a domain by its catalog name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Domain> {
        let name = name.trim();
        Domain::ALL
            .iter()
            .find(|d| d.name().eq_ignore_ascii_case(name))
            .copied()
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
