//! Universe configuration: sector-organized B3 ticker lists.
//!
//! The universe is stored as a TOML file with one `[sectors]` table mapping
//! an economic sector name to its member tickers (without market suffix).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// A sector and how many companies it lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectorSummary {
    pub sector: String,
    pub company_count: usize,
}

/// Tickers found for a sector lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectorMatch {
    pub sector: String,
    pub tickers: Vec<String>,
}

/// The complete universe configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Universe {
    pub sectors: BTreeMap<String, Vec<String>>,
}

impl Universe {
    /// Load a universe from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, String> {
        let content =
            std::fs::read_to_string(path).map_err(|e| format!("read universe file: {e}"))?;
        Self::from_toml(&content)
    }

    /// Parse a universe from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| format!("parse universe TOML: {e}"))
    }

    /// Get tickers for an exact sector name.
    pub fn sector_tickers(&self, sector: &str) -> Option<&[String]> {
        self.sectors.get(sector).map(|v| v.as_slice())
    }

    /// Total number of tickers.
    pub fn ticker_count(&self) -> usize {
        self.sectors.values().map(|v| v.len()).sum()
    }

    /// Sectors with their company counts, largest first; ties by name.
    pub fn sector_summary(&self) -> Vec<SectorSummary> {
        let mut summary: Vec<SectorSummary> = self
            .sectors
            .iter()
            .map(|(name, tickers)| SectorSummary {
                sector: name.clone(),
                company_count: tickers.len(),
            })
            .collect();
        summary.sort_by(|a, b| {
            b.company_count
                .cmp(&a.company_count)
                .then_with(|| a.sector.cmp(&b.sector))
        });
        summary
    }

    /// Companies whose sector name contains `pattern`, ignoring case.
    ///
    /// Matching sectors are merged into one ticker list, truncated to
    /// `limit`. The reported sector is the exact name when there is a single
    /// match, otherwise the pattern as given.
    ///
    /// Tickers are ordered by ticker code, not by company name: the universe
    /// only stores codes. The cut at `limit` follows the same order, so it can
    /// keep different companies than a name-ordered listing would.
    pub fn companies_in_sector(&self, pattern: &str, limit: usize) -> Option<SectorMatch> {
        let needle = pattern.trim().to_lowercase();
        let matched: Vec<(&String, &Vec<String>)> = self
            .sectors
            .iter()
            .filter(|(name, _)| name.to_lowercase().contains(&needle))
            .collect();

        if matched.is_empty() {
            return None;
        }

        let sector = match matched.as_slice() {
            [(name, _)] => (*name).clone(),
            _ => pattern.trim().to_string(),
        };

        let mut tickers: Vec<String> = matched
            .iter()
            .flat_map(|(_, tickers)| tickers.iter().cloned())
            .collect();
        tickers.sort();
        tickers.dedup();
        tickers.truncate(limit);

        Some(SectorMatch { sector, tickers })
    }

    /// Default B3 universe grouped by economic sector.
    pub fn default_b3() -> Self {
        let mut sectors = BTreeMap::new();

        let mut add = |name: &str, tickers: &[&str]| {
            sectors.insert(
                name.to_string(),
                tickers.iter().map(|t| t.to_string()).collect::<Vec<_>>(),
            );
        };

        add(
            "Financeiro",
            &["ITUB4", "BBDC4", "BBAS3", "SANB11", "BPAC11", "B3SA3", "BBSE3", "ITSA4"],
        );
        add(
            "Petróleo, Gás e Biocombustíveis",
            &["PETR4", "PETR3", "PRIO3", "RECV3", "UGPA3", "VBBR3", "CSAN3"],
        );
        add(
            "Materiais Básicos",
            &["VALE3", "GGBR4", "CSNA3", "USIM5", "SUZB3", "KLBN11", "BRAP4", "GOAU4"],
        );
        add(
            "Utilidade Pública",
            &["ELET3", "EQTL3", "CMIG4", "CPFE3", "TAEE11", "SBSP3", "ENGI11", "EGIE3"],
        );
        add(
            "Consumo não Cíclico",
            &["ABEV3", "JBSS3", "BRFS3", "MRFG3", "CRFB3", "ASAI3", "SLCE3"],
        );
        add(
            "Consumo Cíclico",
            &["LREN3", "MGLU3", "RENT3", "CYRE3", "MRVE3", "AZZA3", "CVCB3"],
        );
        add("Saúde", &["RDOR3", "HAPV3", "RADL3", "FLRY3", "HYPE3"]);
        add("Bens Industriais", &["WEGE3", "EMBR3", "CCRO3", "RAIL3", "AZUL4"]);
        add("Comunicações", &["VIVT3", "TIMS3"]);
        add("Tecnologia da Informação", &["TOTS3", "LWSA3", "POSI3"]);

        Self { sectors }
    }

    /// Serialize the universe to TOML.
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("serialize universe: {e}"))
    }
}
