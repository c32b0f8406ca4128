//! Career catalog - the fixed taxonomy with its keyword and career tables
//!
//! Loaded once at startup from `career_clusters.json`. A missing or
//! malformed file is fatal: the server must not run with a partial catalog.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::CatalogError;
use crate::types::Domain;

/// On-disk shape of one catalog entry
#[derive(Debug, Clone, Deserialize)]
pub struct ClusterFile {
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub careers: Vec<String>,
}

/// One domain with its trigger keywords and career labels
#[derive(Debug, Clone)]
pub struct Cluster {
    pub domain: Domain,
    pub keywords: Vec<String>,
    pub careers: Vec<String>,
}

/// The loaded, validated catalog.
///
/// Clusters are kept in catalog order regardless of file order, and the
/// merged keyword table preserves declaration order (catalog order of
/// domains, file order of keywords within a domain). A keyword listed
/// under several domains becomes a single multi-domain entry at its
/// first-seen position.
#[derive(Debug, Clone)]
pub struct Catalog {
    clusters: Vec<Cluster>,
    keyword_table: Vec<(String, Vec<Domain>)>,
}

impl Catalog {
    /// Load the catalog from a JSON file shaped as
    /// `{ "<domain name>": { "keywords": [...], "careers": [...] } }`
    pub fn load(path: impl AsRef<Path>) -> Result<Catalog, CatalogError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let entries: HashMap<String, ClusterFile> =
            serde_json::from_str(&content).map_err(|source| CatalogError::Parse {
                path: path.display().to_string(),
                source,
            })?;

        Catalog::from_entries(entries)
    }

    /// Build and validate a catalog from parsed entries
    pub fn from_entries(entries: HashMap<String, ClusterFile>) -> Result<Catalog, CatalogError> {
        // Every name in the file must belong to the closed enumeration
        let mut by_domain: HashMap<Domain, ClusterFile> = HashMap::new();
        for (name, entry) in entries {
            let domain = Domain::from_name(&name)
                .ok_or_else(|| CatalogError::UnknownDomain(name.clone()))?;
            for keyword in &entry.keywords {
                if keyword.trim().is_empty() {
                    return Err(CatalogError::EmptyKeyword(name.clone()));
                }
            }
            by_domain.insert(domain, entry);
        }

        // Catalog order, with empty clusters for domains the file omits
        let clusters: Vec<Cluster> = Domain::ALL
            .iter()
            .map(|&domain| {
                let entry = by_domain.remove(&domain).unwrap_or(ClusterFile {
                    keywords: Vec::new(),
                    careers: Vec::new(),
                });
                Cluster {
                    domain,
                    keywords: entry
                        .keywords
                        .iter()
                        .map(|k| k.trim().to_lowercase())
                        .collect(),
                    careers: entry.careers,
                }
            })
            .collect();

        let keyword_table = build_keyword_table(&clusters);

        Ok(Catalog {
            clusters,
            keyword_table,
        })
    }

    /// All clusters in catalog order
    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    /// Cluster for a single domain
    pub fn cluster(&self, domain: Domain) -> &Cluster {
        // Clusters mirror Domain::ALL, so the index is the catalog position
        let idx = Domain::ALL.iter().position(|&d| d == domain).unwrap();
        &self.clusters[idx]
    }

    /// Career labels for a domain
    pub fn careers(&self, domain: Domain) -> &[String] {
        &self.cluster(domain).careers
    }

    /// The merged keyword table in declaration order
    pub fn keyword_table(&self) -> &[(String, Vec<Domain>)] {
        &self.keyword_table
    }
}

/// Merge per-cluster keyword lists into one ordered keyword -> domains table
fn build_keyword_table(clusters: &[Cluster]) -> Vec<(String, Vec<Domain>)> {
    let mut table: Vec<(String, Vec<Domain>)> = Vec::new();

    for cluster in clusters {
        for keyword in &cluster.keywords {
            match table.iter_mut().find(|(k, _)| k == keyword) {
                Some((_, domains)) => {
                    if !domains.contains(&cluster.domain) {
                        domains.push(cluster.domain);
                    }
                }
                None => table.push((keyword.clone(), vec![cluster.domain])),
            }
        }
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn entry(keywords: &[&str], careers: &[&str]) -> ClusterFile {
        ClusterFile {
            keywords: keywords.iter().map(|s| s.to_string()).collect(),
            careers: careers.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_from_entries_orders_by_catalog() {
        let mut entries = HashMap::new();
        entries.insert(
            "Sales".to_string(),
            entry(&["selling"], &["Sales Representative"]),
        );
        entries.insert(
            "Medicine & Healthcare".to_string(),
            entry(&["doctor"], &["Physician"]),
        );

        let catalog = Catalog::from_entries(entries).unwrap();
        assert_eq!(catalog.clusters().len(), 17);
        // Medicine comes before Sales in catalog order regardless of map order
        let medicine_idx = catalog
            .clusters()
            .iter()
            .position(|c| c.domain == Domain::MedicineHealthcare)
            .unwrap();
        let sales_idx = catalog
            .clusters()
            .iter()
            .position(|c| c.domain == Domain::Sales)
            .unwrap();
        assert!(medicine_idx < sales_idx);
    }

    #[test]
    fn test_unknown_domain_rejected() {
        let mut entries = HashMap::new();
        entries.insert("Astrology".to_string(), entry(&["stars"], &[]));

        match Catalog::from_entries(entries) {
            Err(CatalogError::UnknownDomain(name)) => assert_eq!(name, "Astrology"),
            other => panic!("expected UnknownDomain, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_empty_keyword_rejected() {
        let mut entries = HashMap::new();
        entries.insert("Sales".to_string(), entry(&["  "], &[]));

        assert!(matches!(
            Catalog::from_entries(entries),
            Err(CatalogError::EmptyKeyword(_))
        ));
    }

    #[test]
    fn test_shared_keyword_merges_into_one_entry() {
        let mut entries = HashMap::new();
        entries.insert("Medicine & Healthcare".to_string(), entry(&["biology"], &[]));
        entries.insert(
            "Environmental & Biological Science".to_string(),
            entry(&["biology"], &[]),
        );

        let catalog = Catalog::from_entries(entries).unwrap();
        let table = catalog.keyword_table();
        assert_eq!(table.len(), 1);
        assert_eq!(table[0].0, "biology");
        assert_eq!(
            table[0].1,
            vec![
                Domain::MedicineHealthcare,
                Domain::EnvironmentalBiologicalScience
            ]
        );
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let result = Catalog::load("/nonexistent/career_clusters.json");
        assert!(matches!(result, Err(CatalogError::Io { .. })));
    }

    #[test]
    fn test_load_malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"not json at all").unwrap();

        let result = Catalog::load(file.path());
        assert!(matches!(result, Err(CatalogError::Parse { .. })));
    }

    #[test]
    fn test_keywords_lowercased_on_load() {
        let mut entries = HashMap::new();
        entries.insert("Sales".to_string(), entry(&["Marketing"], &[]));

        let catalog = Catalog::from_entries(entries).unwrap();
        assert_eq!(catalog.keyword_table()[0].0, "marketing");
    }
}
