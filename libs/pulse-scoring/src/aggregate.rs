//! Portfolio-wide totals and per-chain distribution

use serde::Serialize;

/// Totals for one chain
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChainSummary {
    pub name: String,
    pub count: u64,
    pub tvl: f64,
    pub wallets: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub total_projects: u64,
    #[serde(rename = "totalTVL")]
    pub total_tvl: f64,
    pub total_wallets: u64,
    pub chain_distribution: Vec<ChainSummary>,
}

/// Summarize `(chain, tvl, wallets)` triples. Chains are listed in the order
/// they first appear.
pub fn summarize<'a, I>(projects: I) -> PortfolioSummary
where
    I: IntoIterator<Item = (&'a str, f64, u64)>,
{
    let mut chains: Vec<ChainSummary> = Vec::new();

    for (chain, tvl, wallets) in projects {
        let tvl = if tvl.is_finite() { tvl.max(0.0) } else { 0.0 };

        match chains.iter_mut().find(|c| c.name == chain) {
            Some(summary) => {
                summary.count += 1;
                summary.tvl += tvl;
                summary.wallets = summary.wallets.saturating_add(wallets);
            }
            None => chains.push(ChainSummary {
                name: chain.to_string(),
                count: 1,
                tvl,
                wallets,
            }),
        }
    }

    PortfolioSummary {
        total_projects: chains.iter().map(|c| c.count).sum(),
        total_tvl: chains.iter().map(|c| c.tvl).sum(),
        total_wallets: chains
            .iter()
            .fold(0_u64, |acc, c| acc.saturating_add(c.wallets)),
        chain_distribution: chains,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize_groups_by_chain() {
        let summary = summarize(vec![
            ("Ethereum", 1000.0, 10),
            ("Solana", 50.0, 3),
            ("Ethereum", 500.0, 5),
            ("Arbitrum", 20.0, 1),
        ]);

        assert_eq!(summary.total_projects, 4);
        assert_eq!(summary.total_tvl, 1570.0);
        assert_eq!(summary.total_wallets, 19);

        let names: Vec<&str> = summary
            .chain_distribution
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["Ethereum", "Solana", "Arbitrum"]);

        let eth = &summary.chain_distribution[0];
        assert_eq!(eth.count, 2);
        assert_eq!(eth.tvl, 1500.0);
        assert_eq!(eth.wallets, 15);
    }

    #[test]
    fn test_summarize_empty() {
        let summary = summarize(Vec::new());
        assert_eq!(summary.total_projects, 0);
        assert_eq!(summary.total_tvl, 0.0);
        assert!(summary.chain_distribution.is_empty());
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_value(summarize(vec![("Solana", 1.0, 1)])).unwrap();
        assert!(json.get("totalTVL").is_some());
        assert!(json.get("totalProjects").is_some());
        assert!(json.get("chainDistribution").is_some());
    }
}
