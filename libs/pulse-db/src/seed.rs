//! Built-in catalogue used when no database is configured

use pulse_scoring::HypeLevel;

use crate::entity::{
    DevActivity, ProjectRecord, ProjectScore, Signal, SignalMetrics, SignalType, SocialMetrics,
    TvlBasis,
};

use HypeLevel::{High, Low};
use TvlBasis::{Eth, Usd};

struct SeedProject {
    id: &'static str,
    name: &'static str,
    chain: &'static str,
    tvl: TvlBasis,
    wallets: u64,
    mentions: u64,
    commits: u64,
    score: f64,
    hype: HypeLevel,
    handle: &'static str,
    description: &'static str,
}

const PROJECTS: [SeedProject; 16] = [
    SeedProject {
        id: "1",
        name: "Nexus Protocol",
        chain: "Ethereum",
        tvl: Eth(1000.0),
        wallets: 3500,
        mentions: 25,
        commits: 12,
        score: 89.0,
        hype: Low,
        handle: "nexusprotocol",
        description:
            "A decentralized lending protocol with innovative yield optimization strategies and strong onchain metrics.",
    },
    SeedProject {
        id: "2",
        name: "Solana Punks",
        chain: "Solana",
        tvl: Usd(50_000.0),
        wallets: 800,
        mentions: 1200,
        commits: 3,
        score: 40.0,
        hype: High,
        handle: "solanapunks",
        description:
            "An NFT collection on Solana with high social engagement but limited technical development.",
    },
    SeedProject {
        id: "3",
        name: "Aurora Finance",
        chain: "Ethereum",
        tvl: Eth(2500.0),
        wallets: 5200,
        mentions: 45,
        commits: 28,
        score: 92.0,
        hype: Low,
        handle: "aurorafinance",
        description:
            "A comprehensive DeFi platform offering yield farming, staking, and cross-chain liquidity solutions.",
    },
    SeedProject {
        id: "4",
        name: "MoonDoge",
        chain: "Arbitrum",
        tvl: Usd(25_000.0),
        wallets: 1500,
        mentions: 3500,
        commits: 2,
        score: 35.0,
        hype: High,
        handle: "moondoge",
        description:
            "A meme token with high social media presence but limited utility and development activity.",
    },
    SeedProject {
        id: "5",
        name: "Quantum Swap",
        chain: "Ethereum",
        tvl: Eth(1800.0),
        wallets: 4200,
        mentions: 35,
        commits: 45,
        score: 85.0,
        hype: Low,
        handle: "quantumswap",
        description: "Advanced DEX with concentrated liquidity and MEV protection features.",
    },
    SeedProject {
        id: "6",
        name: "Stellar Vault",
        chain: "Ethereum",
        tvl: Eth(3200.0),
        wallets: 6800,
        mentions: 55,
        commits: 32,
        score: 88.0,
        hype: Low,
        handle: "stellarvault",
        description:
            "Secure yield vaults with automated strategy optimization and risk management.",
    },
    SeedProject {
        id: "7",
        name: "Pulse Network",
        chain: "Ethereum",
        tvl: Eth(1500.0),
        wallets: 3800,
        mentions: 42,
        commits: 28,
        score: 82.0,
        hype: Low,
        handle: "pulsenetwork",
        description: "Layer 2 scaling solution with advanced rollup technology and low fees.",
    },
    SeedProject {
        id: "8",
        name: "Fusion Protocol",
        chain: "Ethereum",
        tvl: Eth(2800.0),
        wallets: 5100,
        mentions: 38,
        commits: 41,
        score: 86.0,
        hype: Low,
        handle: "fusionprotocol",
        description: "Cross-chain bridge protocol with advanced security features and low latency.",
    },
    SeedProject {
        id: "9",
        name: "Horizon Labs",
        chain: "Ethereum",
        tvl: Eth(2200.0),
        wallets: 4500,
        mentions: 48,
        commits: 35,
        score: 84.0,
        hype: Low,
        handle: "horizonlabs",
        description: "Research-driven DeFi protocol focusing on sustainable yield generation.",
    },
    SeedProject {
        id: "10",
        name: "Nova Finance",
        chain: "Ethereum",
        tvl: Eth(1900.0),
        wallets: 4100,
        mentions: 32,
        commits: 39,
        score: 81.0,
        hype: Low,
        handle: "novafinance",
        description:
            "Innovative lending protocol with dynamic interest rates and collateral optimization.",
    },
    SeedProject {
        id: "11",
        name: "Cosmic Cats",
        chain: "Solana",
        tvl: Usd(35_000.0),
        wallets: 1200,
        mentions: 2800,
        commits: 4,
        score: 38.0,
        hype: High,
        handle: "cosmiccats",
        description: "NFT project with viral marketing but minimal technical innovation.",
    },
    SeedProject {
        id: "12",
        name: "Rocket Token",
        chain: "Arbitrum",
        tvl: Usd(18_000.0),
        wallets: 900,
        mentions: 4200,
        commits: 1,
        score: 32.0,
        hype: High,
        handle: "rockettoken",
        description: "Speculative token with aggressive marketing and limited development.",
    },
    SeedProject {
        id: "13",
        name: "Galaxy Gems",
        chain: "Solana",
        tvl: Usd(42_000.0),
        wallets: 1100,
        mentions: 3100,
        commits: 3,
        score: 36.0,
        hype: High,
        handle: "galaxygems",
        description: "NFT marketplace with high social hype but basic functionality.",
    },
    SeedProject {
        id: "14",
        name: "Star Coin",
        chain: "Arbitrum",
        tvl: Usd(22_000.0),
        wallets: 1300,
        mentions: 3800,
        commits: 2,
        score: 33.0,
        hype: High,
        handle: "starcoin",
        description: "Meme token with celebrity endorsements but no real utility.",
    },
    SeedProject {
        id: "15",
        name: "Cosmic Punks",
        chain: "Solana",
        tvl: Usd(28_000.0),
        wallets: 950,
        mentions: 2600,
        commits: 3,
        score: 37.0,
        hype: High,
        handle: "cosmicpunks",
        description: "NFT derivative project with high social engagement but limited innovation.",
    },
    SeedProject {
        id: "16",
        name: "Meteor Token",
        chain: "Arbitrum",
        tvl: Usd(15_000.0),
        wallets: 850,
        mentions: 4500,
        commits: 1,
        score: 31.0,
        hype: High,
        handle: "meteortoken",
        description: "Speculative token with aggressive marketing and minimal development.",
    },
];

/// The seed project catalogue
pub fn projects() -> Vec<ProjectRecord> {
    PROJECTS
        .iter()
        .map(|p| ProjectRecord {
            id: p.id.to_string(),
            name: p.name.to_string(),
            chain: p.chain.to_string(),
            tvl: p.tvl,
            wallets: p.wallets,
            mentions: p.mentions,
            commits: p.commits,
            score: p.score,
            hype: p.hype,
            description: p.description.to_string(),
            twitter_handle: Some(p.handle.to_string()),
        })
        .collect()
}

pub const SIGNALS: [Signal; 2] = [
    Signal {
        id: "1",
        project: "Test DeFi",
        chain: "Ethereum",
        signal_type: SignalType::Bullish,
        confidence: 85,
        timeframe: "7d",
        description: "Strong onchain metrics with increasing wallet activity",
        metrics: SignalMetrics {
            tvl_growth: 25.0,
            wallet_growth: 1200,
            volume_growth: 45.0,
            social_growth: 30.0,
        },
    },
    Signal {
        id: "2",
        project: "NFT Pump",
        chain: "Solana",
        signal_type: SignalType::Bearish,
        confidence: 75,
        timeframe: "3d",
        description: "Declining metrics despite high social activity",
        metrics: SignalMetrics {
            tvl_growth: -15.0,
            wallet_growth: -500,
            volume_growth: -20.0,
            social_growth: 200.0,
        },
    },
];

pub const SOCIAL: [SocialMetrics; 2] = [
    SocialMetrics {
        project_id: "1",
        project: "Test DeFi",
        chain: "Ethereum",
        twitter_mentions: 25,
        discord_members: 1200,
        reddit_posts: 5,
    },
    SocialMetrics {
        project_id: "2",
        project: "NFT Pump",
        chain: "Solana",
        twitter_mentions: 1200,
        discord_members: 8000,
        reddit_posts: 30,
    },
];

pub const DEV_ACTIVITY: [DevActivity; 2] = [
    DevActivity {
        project_id: "1",
        project: "Test DeFi",
        chain: "Ethereum",
        github_repo: "user/test-defi",
        commits_last_week: 12,
        open_issues: 3,
        contributors: 4,
    },
    DevActivity {
        project_id: "2",
        project: "NFT Pump",
        chain: "Solana",
        github_repo: "user/nft-pump",
        commits_last_week: 3,
        open_issues: 10,
        contributors: 2,
    },
];

pub const SCORES: [ProjectScore; 2] = [
    ProjectScore {
        project_id: "1",
        project: "Test DeFi",
        chain: "Ethereum",
        score: 89.0,
        flag: "High Signal, Low Hype",
    },
    ProjectScore {
        project_id: "2",
        project: "NFT Pump",
        chain: "Solana",
        score: 40.0,
        flag: "Likely Hype",
    },
];
