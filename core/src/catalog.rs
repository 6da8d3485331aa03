//! Curated reference data: investors, industries, headquarters cities
//! and the named AI coding tools every dataset must contain.
//!
//! These lists are loaded verbatim. Changing their order changes which
//! entries a given seed picks.

use crate::types::InvestorKind;

pub struct CuratedInvestor {
    pub name: &'static str,
    pub kind: InvestorKind,
    pub focus: &'static [&'static str],
}

pub struct Industry {
    pub name: &'static str,
    pub sub_industries: &'static [&'static str],
}

pub struct CuratedStartup {
    pub name: &'static str,
    pub description: &'static str,
    pub sub_industry: &'static str,
}

/// Industry every curated startup is filed under.
pub const CURATED_INDUSTRY: &str = "AI/ML";

pub fn industries() -> &'static [Industry] {
    &[
        Industry { name: "AI/ML", sub_industries: &["Developer Tools", "Enterprise AI", "Computer Vision", "NLP", "MLOps", "AI Infrastructure"] },
        Industry { name: "Fintech", sub_industries: &["Payments", "Banking", "Insurance", "Lending", "Wealth Management", "Crypto"] },
        Industry { name: "Healthcare", sub_industries: &["Digital Health", "Biotech", "Medical Devices", "Health Insurance", "Telemedicine"] },
        Industry { name: "Developer Tools", sub_industries: &["DevOps", "Security", "Databases", "APIs", "IDEs", "Testing"] },
        Industry { name: "E-commerce", sub_industries: &["Marketplaces", "D2C", "Logistics", "Payments", "Analytics"] },
        Industry { name: "Cybersecurity", sub_industries: &["Identity", "Cloud Security", "Endpoint", "Network", "AppSec"] },
        Industry { name: "Enterprise SaaS", sub_industries: &["HR Tech", "Sales Tech", "Marketing Tech", "Productivity", "Analytics"] },
        Industry { name: "Climate Tech", sub_industries: &["Clean Energy", "Carbon", "EVs", "Agriculture", "Sustainability"] },
    ]
}

pub fn cities() -> &'static [&'static str] {
    &[
        "San Francisco, CA", "New York, NY", "Austin, TX", "Seattle, WA", "Boston, MA",
        "Los Angeles, CA", "Denver, CO", "Miami, FL", "Chicago, IL", "Atlanta, GA",
        "London, UK", "Berlin, Germany", "Tel Aviv, Israel", "Toronto, Canada", "Singapore",
    ]
}

/// Named AI coding tools seeded ahead of any synthesized startup.
pub fn curated_startups() -> &'static [CuratedStartup] {
    &[
        CuratedStartup { name: "Cursor", description: "AI-first code editor built on VS Code", sub_industry: "IDEs" },
        CuratedStartup { name: "Replit", description: "Browser-based IDE with AI coding assistant", sub_industry: "IDEs" },
        CuratedStartup { name: "Codeium", description: "Free AI code completion and chat", sub_industry: "Developer Tools" },
        CuratedStartup { name: "Tabnine", description: "AI code completion for all IDEs", sub_industry: "Developer Tools" },
        CuratedStartup { name: "Sourcegraph Cody", description: "AI coding assistant with codebase context", sub_industry: "Developer Tools" },
        CuratedStartup { name: "Codegen", description: "AI-powered code generation platform", sub_industry: "Developer Tools" },
        CuratedStartup { name: "Sweep AI", description: "AI junior developer for GitHub issues", sub_industry: "Developer Tools" },
        CuratedStartup { name: "Aider", description: "AI pair programming in your terminal", sub_industry: "Developer Tools" },
        CuratedStartup { name: "Continue", description: "Open-source AI code assistant", sub_industry: "IDEs" },
        CuratedStartup { name: "Cosine", description: "AI software engineer for complex tasks", sub_industry: "Developer Tools" },
    ]
}

pub fn investors() -> &'static [CuratedInvestor] {
    use InvestorKind::*;
    &[
        // Top-tier VCs
        CuratedInvestor { name: "Andreessen Horowitz", kind: Venture, focus: &["AI/ML", "Fintech", "Enterprise SaaS", "Crypto"] },
        CuratedInvestor { name: "Sequoia Capital", kind: Venture, focus: &["AI/ML", "Enterprise SaaS", "Fintech", "Healthcare"] },
        CuratedInvestor { name: "Accel", kind: Venture, focus: &["Enterprise SaaS", "Fintech", "Cybersecurity"] },
        CuratedInvestor { name: "Lightspeed Venture Partners", kind: Venture, focus: &["Enterprise SaaS", "Fintech", "Healthcare"] },
        CuratedInvestor { name: "Index Ventures", kind: Venture, focus: &["Fintech", "E-commerce", "Enterprise SaaS"] },
        CuratedInvestor { name: "Benchmark", kind: Venture, focus: &["Enterprise SaaS", "E-commerce", "Developer Tools"] },
        CuratedInvestor { name: "Greylock Partners", kind: Venture, focus: &["Enterprise SaaS", "AI/ML", "Developer Tools"] },
        CuratedInvestor { name: "Bessemer Venture Partners", kind: Venture, focus: &["Enterprise SaaS", "Healthcare", "Developer Tools"] },
        CuratedInvestor { name: "General Catalyst", kind: Venture, focus: &["Fintech", "Healthcare", "Enterprise SaaS"] },
        CuratedInvestor { name: "NEA", kind: Venture, focus: &["Healthcare", "Enterprise SaaS", "Fintech"] },
        CuratedInvestor { name: "Founders Fund", kind: Venture, focus: &["AI/ML", "Climate Tech", "Healthcare"] },
        CuratedInvestor { name: "Khosla Ventures", kind: Venture, focus: &["AI/ML", "Climate Tech", "Healthcare"] },
        CuratedInvestor { name: "Insight Partners", kind: GrowthEquity, focus: &["Enterprise SaaS", "Cybersecurity", "Fintech"] },
        CuratedInvestor { name: "Tiger Global", kind: GrowthEquity, focus: &["Fintech", "E-commerce", "Enterprise SaaS"] },
        CuratedInvestor { name: "Coatue Management", kind: GrowthEquity, focus: &["AI/ML", "Fintech", "Enterprise SaaS"] },
        // Seed / early stage
        CuratedInvestor { name: "Y Combinator", kind: SeedFund, focus: &["AI/ML", "Developer Tools", "Enterprise SaaS", "Fintech"] },
        CuratedInvestor { name: "First Round Capital", kind: SeedFund, focus: &["Enterprise SaaS", "Developer Tools", "E-commerce"] },
        CuratedInvestor { name: "Initialized Capital", kind: SeedFund, focus: &["AI/ML", "Developer Tools", "Fintech"] },
        CuratedInvestor { name: "Floodgate", kind: SeedFund, focus: &["Enterprise SaaS", "Developer Tools", "AI/ML"] },
        CuratedInvestor { name: "SV Angel", kind: SeedFund, focus: &["AI/ML", "Enterprise SaaS", "Developer Tools"] },
        CuratedInvestor { name: "Lowercase Capital", kind: SeedFund, focus: &["Enterprise SaaS", "E-commerce", "Fintech"] },
        CuratedInvestor { name: "BoxGroup", kind: SeedFund, focus: &["Enterprise SaaS", "Fintech", "E-commerce"] },
        CuratedInvestor { name: "Precursor Ventures", kind: SeedFund, focus: &["Enterprise SaaS", "Fintech", "Healthcare"] },
        // AI-focused
        CuratedInvestor { name: "AI Grant", kind: SeedFund, focus: &["AI/ML"] },
        CuratedInvestor { name: "Air Street Capital", kind: SeedFund, focus: &["AI/ML", "Developer Tools"] },
        CuratedInvestor { name: "Conviction", kind: Venture, focus: &["AI/ML", "Developer Tools"] },
        CuratedInvestor { name: "Radical Ventures", kind: Venture, focus: &["AI/ML"] },
        // Corporate
        CuratedInvestor { name: "Google Ventures", kind: Corporate, focus: &["AI/ML", "Healthcare", "Enterprise SaaS"] },
        CuratedInvestor { name: "Microsoft M12", kind: Corporate, focus: &["Enterprise SaaS", "AI/ML", "Cybersecurity"] },
        CuratedInvestor { name: "Salesforce Ventures", kind: Corporate, focus: &["Enterprise SaaS", "AI/ML"] },
        CuratedInvestor { name: "Intel Capital", kind: Corporate, focus: &["AI/ML", "Cybersecurity", "Developer Tools"] },
        CuratedInvestor { name: "Nvidia GPU Ventures", kind: Corporate, focus: &["AI/ML", "Developer Tools"] },
        CuratedInvestor { name: "Amazon Alexa Fund", kind: Corporate, focus: &["AI/ML", "E-commerce"] },
        // Fintech specialists
        CuratedInvestor { name: "Ribbit Capital", kind: Venture, focus: &["Fintech"] },
        CuratedInvestor { name: "QED Investors", kind: Venture, focus: &["Fintech"] },
        CuratedInvestor { name: "Nyca Partners", kind: Venture, focus: &["Fintech"] },
        // Healthcare specialists
        CuratedInvestor { name: "Andreessen Horowitz Bio", kind: Venture, focus: &["Healthcare"] },
        CuratedInvestor { name: "GV Life Sciences", kind: Corporate, focus: &["Healthcare"] },
        CuratedInvestor { name: "ARCH Venture Partners", kind: Venture, focus: &["Healthcare"] },
        // Climate specialists
        CuratedInvestor { name: "Breakthrough Energy Ventures", kind: Venture, focus: &["Climate Tech"] },
        CuratedInvestor { name: "Lowercarbon Capital", kind: Venture, focus: &["Climate Tech"] },
        CuratedInvestor { name: "Congruent Ventures", kind: Venture, focus: &["Climate Tech"] },
        // International
        CuratedInvestor { name: "Balderton Capital", kind: Venture, focus: &["Enterprise SaaS", "Fintech"] },
        CuratedInvestor { name: "Atomico", kind: Venture, focus: &["Enterprise SaaS", "Fintech", "Climate Tech"] },
        CuratedInvestor { name: "Northzone", kind: Venture, focus: &["Fintech", "Enterprise SaaS"] },
        CuratedInvestor { name: "Softbank Vision Fund", kind: GrowthEquity, focus: &["AI/ML", "E-commerce", "Fintech"] },
        // More seed funds and generalists
        CuratedInvestor { name: "Notation Capital", kind: SeedFund, focus: &["Developer Tools", "Enterprise SaaS"] },
        CuratedInvestor { name: "Craft Ventures", kind: Venture, focus: &["Enterprise SaaS", "Fintech", "AI/ML"] },
        CuratedInvestor { name: "Redpoint Ventures", kind: Venture, focus: &["Enterprise SaaS", "Developer Tools", "Fintech"] },
        CuratedInvestor { name: "Scale Venture Partners", kind: Venture, focus: &["Enterprise SaaS", "AI/ML"] },
        CuratedInvestor { name: "Spark Capital", kind: Venture, focus: &["Enterprise SaaS", "E-commerce", "Fintech"] },
        CuratedInvestor { name: "Union Square Ventures", kind: Venture, focus: &["Fintech", "E-commerce", "Climate Tech"] },
        CuratedInvestor { name: "Battery Ventures", kind: Venture, focus: &["Enterprise SaaS", "Developer Tools"] },
        CuratedInvestor { name: "IVP", kind: GrowthEquity, focus: &["Enterprise SaaS", "Fintech", "E-commerce"] },
        CuratedInvestor { name: "Menlo Ventures", kind: Venture, focus: &["Enterprise SaaS", "Cybersecurity", "AI/ML"] },
        CuratedInvestor { name: "Felicis Ventures", kind: Venture, focus: &["Enterprise SaaS", "Fintech", "Developer Tools"] },
        CuratedInvestor { name: "CRV", kind: Venture, focus: &["Enterprise SaaS", "Developer Tools", "AI/ML"] },
        CuratedInvestor { name: "Wing VC", kind: Venture, focus: &["Enterprise SaaS", "AI/ML"] },
        CuratedInvestor { name: "Sapphire Ventures", kind: GrowthEquity, focus: &["Enterprise SaaS"] },
        CuratedInvestor { name: "Obvious Ventures", kind: Venture, focus: &["Climate Tech", "Healthcare"] },
        CuratedInvestor { name: "Data Collective", kind: Venture, focus: &["AI/ML", "Developer Tools"] },
        CuratedInvestor { name: "Emergence Capital", kind: Venture, focus: &["Enterprise SaaS"] },
        CuratedInvestor { name: "Costanoa Ventures", kind: SeedFund, focus: &["Enterprise SaaS", "Developer Tools"] },
        CuratedInvestor { name: "Unusual Ventures", kind: SeedFund, focus: &["Enterprise SaaS", "Developer Tools"] },
        CuratedInvestor { name: "Foundation Capital", kind: Venture, focus: &["Enterprise SaaS", "AI/ML"] },
        CuratedInvestor { name: "Eclipse Ventures", kind: Venture, focus: &["Developer Tools", "Climate Tech"] },
    ]
}
