//! Static seed list the registry is built from at session start.

use super::company::{Company, CompanyProfile, CompanyRegistry, FinancialYear};
use super::error::SimvestorError;
use super::sector::Sector;

pub struct CompanySeed {
    pub name: &'static str,
    pub price: f64,
    pub sector: Sector,
    pub roe: f64,
    pub fcf: f64,
    pub market_cap: f64,
    pub pe_ratio: f64,
    pub revenue: f64,
    pub profit: f64,
    pub roce: f64,
    pub assets: f64,
    pub debt: f64,
    pub debt_to_equity: f64,
    pub history: [FinancialYear; 2],
    pub description: &'static str,
    pub founded: i32,
    pub headquarters: &'static str,
    pub employees: u32,
}

impl CompanySeed {
    pub fn to_company(&self) -> Company {
        Company {
            name: self.name.to_string(),
            price: self.price,
            price_change: None,
            sector: self.sector,
            roe: self.roe,
            fcf: self.fcf,
            market_cap: self.market_cap,
            pe_ratio: self.pe_ratio,
            revenue: self.revenue,
            profit: self.profit,
            roce: self.roce,
            assets: self.assets,
            debt: self.debt,
            debt_to_equity: self.debt_to_equity,
            history: self.history.to_vec(),
            profile: CompanyProfile {
                description: self.description.to_string(),
                founded: self.founded,
                headquarters: self.headquarters.to_string(),
                employees: self.employees,
            },
        }
    }
}

/// Fresh registry holding every seed company at its opening price.
pub fn seed_registry() -> Result<CompanyRegistry, SimvestorError> {
    CompanyRegistry::new(SEED_COMPANIES.iter().map(CompanySeed::to_company).collect())
}

pub const SEED_COMPANIES: [CompanySeed; 20] = [
    CompanySeed {
        name: "TechNova",
        price: 100.0,
        sector: Sector::Technology,
        roe: 0.15,
        fcf: 500000.0,
        market_cap: 50_000_000_000.0,
        pe_ratio: 25.0,
        revenue: 12_000_000_000.0,
        profit: 3_000_000_000.0,
        roce: 0.18,
        assets: 60_000_000_000.0,
        debt: 18_000_000_000.0,
        debt_to_equity: 0.3,
        history: [
            FinancialYear { year: 2024, revenue: 12_000_000_000.0, profit: 3_000_000_000.0, fcf: 500000.0, pe: 25.0, roi: 0.15, roce: 0.18 },
            FinancialYear { year: 2023, revenue: 10_000_000_000.0, profit: 2_500_000_000.0, fcf: 450000.0, pe: 22.0, roi: 0.14, roce: 0.16 },
        ],
        description: "TechNova is a leading innovator in artificial intelligence and cloud computing solutions.",
        founded: 2010,
        headquarters: "Silicon Valley, CA",
        employees: 15000,
    },
    CompanySeed {
        name: "ByteWorks",
        price: 85.0,
        sector: Sector::Technology,
        roe: 0.12,
        fcf: 320000.0,
        market_cap: 30_000_000_000.0,
        pe_ratio: 22.0,
        revenue: 8_000_000_000.0,
        profit: 2_000_000_000.0,
        roce: 0.15,
        assets: 40_000_000_000.0,
        debt: 10_000_000_000.0,
        debt_to_equity: 0.25,
        history: [
            FinancialYear { year: 2024, revenue: 8_000_000_000.0, profit: 2_000_000_000.0, fcf: 320000.0, pe: 22.0, roi: 0.12, roce: 0.15 },
            FinancialYear { year: 2023, revenue: 7_000_000_000.0, profit: 1_800_000_000.0, fcf: 300000.0, pe: 20.0, roi: 0.11, roce: 0.14 },
        ],
        description: "ByteWorks specializes in enterprise software solutions and cybersecurity.",
        founded: 2012,
        headquarters: "Boston, MA",
        employees: 10000,
    },
    CompanySeed {
        name: "CloudPeak",
        price: 150.0,
        sector: Sector::Technology,
        roe: 0.18,
        fcf: 800000.0,
        market_cap: 60_000_000_000.0,
        pe_ratio: 28.0,
        revenue: 14_000_000_000.0,
        profit: 3_500_000_000.0,
        roce: 0.2,
        assets: 70_000_000_000.0,
        debt: 24_500_000_000.0,
        debt_to_equity: 0.35,
        history: [
            FinancialYear { year: 2024, revenue: 14_000_000_000.0, profit: 3_500_000_000.0, fcf: 800000.0, pe: 28.0, roi: 0.18, roce: 0.2 },
            FinancialYear { year: 2023, revenue: 12_000_000_000.0, profit: 3_000_000_000.0, fcf: 700000.0, pe: 25.0, roi: 0.16, roce: 0.18 },
        ],
        description: "CloudPeak is a major player in cloud computing and data storage solutions.",
        founded: 2008,
        headquarters: "Seattle, WA",
        employees: 20000,
    },
    CompanySeed {
        name: "DataFlow",
        price: 95.0,
        sector: Sector::Technology,
        roe: 0.14,
        fcf: 420000.0,
        market_cap: 35_000_000_000.0,
        pe_ratio: 24.0,
        revenue: 10_000_000_000.0,
        profit: 2_500_000_000.0,
        roce: 0.17,
        assets: 45_000_000_000.0,
        debt: 12_600_000_000.0,
        debt_to_equity: 0.28,
        history: [
            FinancialYear { year: 2024, revenue: 10_000_000_000.0, profit: 2_500_000_000.0, fcf: 420000.0, pe: 24.0, roi: 0.14, roce: 0.17 },
            FinancialYear { year: 2023, revenue: 9_000_000_000.0, profit: 2_200_000_000.0, fcf: 400000.0, pe: 22.0, roi: 0.13, roce: 0.15 },
        ],
        description: "DataFlow provides cutting-edge solutions in big data and analytics.",
        founded: 2015,
        headquarters: "Austin, TX",
        employees: 8000,
    },
    CompanySeed {
        name: "HealthPlus",
        price: 90.0,
        sector: Sector::Healthcare,
        roe: 0.1,
        fcf: 250000.0,
        market_cap: 20_000_000_000.0,
        pe_ratio: 20.0,
        revenue: 5_000_000_000.0,
        profit: 1_000_000_000.0,
        roce: 0.12,
        assets: 25_000_000_000.0,
        debt: 10_000_000_000.0,
        debt_to_equity: 0.4,
        history: [
            FinancialYear { year: 2024, revenue: 5_000_000_000.0, profit: 1_000_000_000.0, fcf: 250000.0, pe: 20.0, roi: 0.1, roce: 0.12 },
            FinancialYear { year: 2023, revenue: 4_500_000_000.0, profit: 900_000_000.0, fcf: 230000.0, pe: 18.0, roi: 0.09, roce: 0.11 },
        ],
        description: "HealthPlus is a prominent healthcare company focusing on medical devices and health IT solutions.",
        founded: 2005,
        headquarters: "New York, NY",
        employees: 12000,
    },
    CompanySeed {
        name: "MediTech",
        price: 110.0,
        sector: Sector::Healthcare,
        roe: 0.13,
        fcf: 380000.0,
        market_cap: 25_000_000_000.0,
        pe_ratio: 23.0,
        revenue: 7_000_000_000.0,
        profit: 1_500_000_000.0,
        roce: 0.14,
        assets: 30_000_000_000.0,
        debt: 10_500_000_000.0,
        debt_to_equity: 0.35,
        history: [
            FinancialYear { year: 2024, revenue: 7_000_000_000.0, profit: 1_500_000_000.0, fcf: 380000.0, pe: 23.0, roi: 0.13, roce: 0.14 },
            FinancialYear { year: 2023, revenue: 6_000_000_000.0, profit: 1_300_000_000.0, fcf: 350000.0, pe: 21.0, roi: 0.12, roce: 0.13 },
        ],
        description: "MediTech is at the forefront of medical technology, offering innovative solutions for patient care.",
        founded: 2011,
        headquarters: "San Francisco, CA",
        employees: 9000,
    },
    CompanySeed {
        name: "BioCore",
        price: 75.0,
        sector: Sector::Healthcare,
        roe: 0.09,
        fcf: 200000.0,
        market_cap: 15_000_000_000.0,
        pe_ratio: 18.0,
        revenue: 4_000_000_000.0,
        profit: 800_000_000.0,
        roce: 0.1,
        assets: 20_000_000_000.0,
        debt: 9_000_000_000.0,
        debt_to_equity: 0.45,
        history: [
            FinancialYear { year: 2024, revenue: 4_000_000_000.0, profit: 800_000_000.0, fcf: 200000.0, pe: 18.0, roi: 0.09, roce: 0.1 },
            FinancialYear { year: 2023, revenue: 3_500_000_000.0, profit: 700_000_000.0, fcf: 180000.0, pe: 17.0, roi: 0.08, roce: 0.09 },
        ],
        description: "BioCore is dedicated to advancing healthcare through biotechnology and pharmaceutical innovations.",
        founded: 2000,
        headquarters: "Los Angeles, CA",
        employees: 5000,
    },
    CompanySeed {
        name: "VitalCare",
        price: 130.0,
        sector: Sector::Healthcare,
        roe: 0.16,
        fcf: 550000.0,
        market_cap: 30_000_000_000.0,
        pe_ratio: 26.0,
        revenue: 9_000_000_000.0,
        profit: 2_300_000_000.0,
        roce: 0.19,
        assets: 35_000_000_000.0,
        debt: 11_200_000_000.0,
        debt_to_equity: 0.32,
        history: [
            FinancialYear { year: 2024, revenue: 9_000_000_000.0, profit: 2_300_000_000.0, fcf: 550000.0, pe: 26.0, roi: 0.16, roce: 0.19 },
            FinancialYear { year: 2023, revenue: 8_000_000_000.0, profit: 2_000_000_000.0, fcf: 500000.0, pe: 24.0, roi: 0.15, roce: 0.17 },
        ],
        description: "VitalCare is a leader in healthcare services, providing comprehensive solutions for patient management.",
        founded: 2014,
        headquarters: "Chicago, IL",
        employees: 7000,
    },
    CompanySeed {
        name: "FinEdge",
        price: 120.0,
        sector: Sector::Finance,
        roe: 0.18,
        fcf: 700000.0,
        market_cap: 55_000_000_000.0,
        pe_ratio: 27.0,
        revenue: 13_000_000_000.0,
        profit: 3_500_000_000.0,
        roce: 0.21,
        assets: 150_000_000_000.0,
        debt: 45_000_000_000.0,
        debt_to_equity: 0.3,
        history: [
            FinancialYear { year: 2024, revenue: 13_000_000_000.0, profit: 3_500_000_000.0, fcf: 700000.0, pe: 27.0, roi: 0.18, roce: 0.21 },
            FinancialYear { year: 2023, revenue: 11_000_000_000.0, profit: 3_000_000_000.0, fcf: 600000.0, pe: 25.0, roi: 0.16, roce: 0.19 },
        ],
        description: "FinEdge offers innovative financial solutions and investment strategies.",
        founded: 2003,
        headquarters: "Miami, FL",
        employees: 6000,
    },
    CompanySeed {
        name: "WealthWise",
        price: 95.0,
        sector: Sector::Finance,
        roe: 0.15,
        fcf: 450000.0,
        market_cap: 35_000_000_000.0,
        pe_ratio: 24.0,
        revenue: 9_000_000_000.0,
        profit: 2_200_000_000.0,
        roce: 0.18,
        assets: 100_000_000_000.0,
        debt: 35_000_000_000.0,
        debt_to_equity: 0.35,
        history: [
            FinancialYear { year: 2024, revenue: 9_000_000_000.0, profit: 2_200_000_000.0, fcf: 450000.0, pe: 24.0, roi: 0.15, roce: 0.18 },
            FinancialYear { year: 2023, revenue: 8_000_000_000.0, profit: 2_000_000_000.0, fcf: 400000.0, pe: 22.0, roi: 0.14, roce: 0.17 },
        ],
        description: "WealthWise is a premier financial advisory firm, guiding clients in wealth accumulation and management.",
        founded: 2001,
        headquarters: "San Diego, CA",
        employees: 5000,
    },
    CompanySeed {
        name: "SecureBank",
        price: 140.0,
        sector: Sector::Finance,
        roe: 0.17,
        fcf: 850000.0,
        market_cap: 70_000_000_000.0,
        pe_ratio: 30.0,
        revenue: 16_000_000_000.0,
        profit: 4_000_000_000.0,
        roce: 0.22,
        assets: 200_000_000_000.0,
        debt: 56_000_000_000.0,
        debt_to_equity: 0.28,
        history: [
            FinancialYear { year: 2024, revenue: 16_000_000_000.0, profit: 4_000_000_000.0, fcf: 850000.0, pe: 30.0, roi: 0.17, roce: 0.22 },
            FinancialYear { year: 2023, revenue: 14_000_000_000.0, profit: 3_500_000_000.0, fcf: 700000.0, pe: 28.0, roi: 0.16, roce: 0.2 },
        ],
        description: "SecureBank is a leading global bank, offering a wide range of financial services.",
        founded: 1995,
        headquarters: "London, UK",
        employees: 30000,
    },
    CompanySeed {
        name: "InvestPro",
        price: 88.0,
        sector: Sector::Finance,
        roe: 0.14,
        fcf: 380000.0,
        market_cap: 25_000_000_000.0,
        pe_ratio: 22.0,
        revenue: 7_000_000_000.0,
        profit: 1_600_000_000.0,
        roce: 0.15,
        assets: 80_000_000_000.0,
        debt: 26_400_000_000.0,
        debt_to_equity: 0.33,
        history: [
            FinancialYear { year: 2024, revenue: 7_000_000_000.0, profit: 1_600_000_000.0, fcf: 380000.0, pe: 22.0, roi: 0.14, roce: 0.15 },
            FinancialYear { year: 2023, revenue: 6_000_000_000.0, profit: 1_400_000_000.0, fcf: 350000.0, pe: 20.0, roi: 0.13, roce: 0.14 },
        ],
        description: "InvestPro provides expert investment management and financial planning services.",
        founded: 2006,
        headquarters: "Toronto, Canada",
        employees: 4000,
    },
    CompanySeed {
        name: "GreenCore",
        price: 80.0,
        sector: Sector::Energy,
        roe: 0.12,
        fcf: 300000.0,
        market_cap: 20_000_000_000.0,
        pe_ratio: 19.0,
        revenue: 6_000_000_000.0,
        profit: 1_200_000_000.0,
        roce: 0.13,
        assets: 25_000_000_000.0,
        debt: 10_000_000_000.0,
        debt_to_equity: 0.4,
        history: [
            FinancialYear { year: 2024, revenue: 6_000_000_000.0, profit: 1_200_000_000.0, fcf: 300000.0, pe: 19.0, roi: 0.12, roce: 0.13 },
            FinancialYear { year: 2023, revenue: 5_000_000_000.0, profit: 1_000_000_000.0, fcf: 280000.0, pe: 17.0, roi: 0.11, roce: 0.12 },
        ],
        description: "GreenCore is committed to providing sustainable and renewable energy solutions.",
        founded: 2013,
        headquarters: "Denver, CO",
        employees: 3000,
    },
    CompanySeed {
        name: "SolarFlow",
        price: 70.0,
        sector: Sector::Energy,
        roe: 0.11,
        fcf: 250000.0,
        market_cap: 15_000_000_000.0,
        pe_ratio: 18.0,
        revenue: 4_000_000_000.0,
        profit: 900_000_000.0,
        roce: 0.11,
        assets: 18_000_000_000.0,
        debt: 8_100_000_000.0,
        debt_to_equity: 0.45,
        history: [
            FinancialYear { year: 2024, revenue: 4_000_000_000.0, profit: 900_000_000.0, fcf: 250000.0, pe: 18.0, roi: 0.11, roce: 0.11 },
            FinancialYear { year: 2023, revenue: 3_500_000_000.0, profit: 800_000_000.0, fcf: 230000.0, pe: 16.0, roi: 0.1, roce: 0.1 },
        ],
        description: "SolarFlow specializes in solar energy solutions, promoting clean and sustainable power.",
        founded: 2016,
        headquarters: "Phoenix, AZ",
        employees: 2000,
    },
    CompanySeed {
        name: "WindTech",
        price: 65.0,
        sector: Sector::Energy,
        roe: 0.09,
        fcf: 180000.0,
        market_cap: 10_000_000_000.0,
        pe_ratio: 17.0,
        revenue: 3_000_000_000.0,
        profit: 600_000_000.0,
        roce: 0.1,
        assets: 15_000_000_000.0,
        debt: 7_500_000_000.0,
        debt_to_equity: 0.5,
        history: [
            FinancialYear { year: 2024, revenue: 3_000_000_000.0, profit: 600_000_000.0, fcf: 180000.0, pe: 17.0, roi: 0.09, roce: 0.1 },
            FinancialYear { year: 2023, revenue: 2_500_000_000.0, profit: 500_000_000.0, fcf: 150000.0, pe: 15.0, roi: 0.08, roce: 0.09 },
        ],
        description: "WindTech is a pioneer in wind energy technology, providing innovative solutions for clean power.",
        founded: 2010,
        headquarters: "Dallas, TX",
        employees: 2500,
    },
    CompanySeed {
        name: "ConsumerFirst",
        price: 92.0,
        sector: Sector::Consumer,
        roe: 0.13,
        fcf: 420000.0,
        market_cap: 22_000_000_000.0,
        pe_ratio: 21.0,
        revenue: 8_000_000_000.0,
        profit: 1_800_000_000.0,
        roce: 0.16,
        assets: 28_000_000_000.0,
        debt: 8_400_000_000.0,
        debt_to_equity: 0.3,
        history: [
            FinancialYear { year: 2024, revenue: 8_000_000_000.0, profit: 1_800_000_000.0, fcf: 420000.0, pe: 21.0, roi: 0.13, roce: 0.16 },
            FinancialYear { year: 2023, revenue: 7_000_000_000.0, profit: 1_600_000_000.0, fcf: 400000.0, pe: 19.0, roi: 0.12, roce: 0.15 },
        ],
        description: "ConsumerFirst is dedicated to delivering top-quality consumer goods and exceptional service.",
        founded: 2007,
        headquarters: "Seattle, WA",
        employees: 4000,
    },
    CompanySeed {
        name: "RetailPro",
        price: 78.0,
        sector: Sector::Consumer,
        roe: 0.11,
        fcf: 290000.0,
        market_cap: 18_000_000_000.0,
        pe_ratio: 19.0,
        revenue: 5_000_000_000.0,
        profit: 1_100_000_000.0,
        roce: 0.14,
        assets: 22_000_000_000.0,
        debt: 7_700_000_000.0,
        debt_to_equity: 0.35,
        history: [
            FinancialYear { year: 2024, revenue: 5_000_000_000.0, profit: 1_100_000_000.0, fcf: 290000.0, pe: 19.0, roi: 0.11, roce: 0.14 },
            FinancialYear { year: 2023, revenue: 4_500_000_000.0, profit: 1_000_000_000.0, fcf: 270000.0, pe: 17.0, roi: 0.1, roce: 0.13 },
        ],
        description: "RetailPro is a leading retailer, offering a wide range of products at competitive prices.",
        founded: 2015,
        headquarters: "Miami, FL",
        employees: 3500,
    },
    CompanySeed {
        name: "BrandMaster",
        price: 105.0,
        sector: Sector::Consumer,
        roe: 0.15,
        fcf: 480000.0,
        market_cap: 25_000_000_000.0,
        pe_ratio: 25.0,
        revenue: 9_000_000_000.0,
        profit: 2_200_000_000.0,
        roce: 0.17,
        assets: 30_000_000_000.0,
        debt: 9_600_000_000.0,
        debt_to_equity: 0.32,
        history: [
            FinancialYear { year: 2024, revenue: 9_000_000_000.0, profit: 2_200_000_000.0, fcf: 480000.0, pe: 25.0, roi: 0.15, roce: 0.17 },
            FinancialYear { year: 2023, revenue: 8_000_000_000.0, profit: 2_000_000_000.0, fcf: 450000.0, pe: 23.0, roi: 0.14, roce: 0.16 },
        ],
        description: "BrandMaster is a global leader in consumer branding and marketing solutions.",
        founded: 2002,
        headquarters: "Los Angeles, CA",
        employees: 6000,
    },
    CompanySeed {
        name: "IndusTech",
        price: 115.0,
        sector: Sector::Industrial,
        roe: 0.16,
        fcf: 520000.0,
        market_cap: 30_000_000_000.0,
        pe_ratio: 26.0,
        revenue: 10_000_000_000.0,
        profit: 2_600_000_000.0,
        roce: 0.18,
        assets: 40_000_000_000.0,
        debt: 12_000_000_000.0,
        debt_to_equity: 0.3,
        history: [
            FinancialYear { year: 2024, revenue: 10_000_000_000.0, profit: 2_600_000_000.0, fcf: 520000.0, pe: 26.0, roi: 0.16, roce: 0.18 },
            FinancialYear { year: 2023, revenue: 9_000_000_000.0, profit: 2_300_000_000.0, fcf: 480000.0, pe: 24.0, roi: 0.15, roce: 0.17 },
        ],
        description: "IndusTech provides innovative solutions in industrial automation and manufacturing.",
        founded: 1998,
        headquarters: "Detroit, MI",
        employees: 8000,
    },
    CompanySeed {
        name: "ManufactEx",
        price: 98.0,
        sector: Sector::Industrial,
        roe: 0.14,
        fcf: 440000.0,
        market_cap: 25_000_000_000.0,
        pe_ratio: 24.0,
        revenue: 9_000_000_000.0,
        profit: 2_100_000_000.0,
        roce: 0.16,
        assets: 35_000_000_000.0,
        debt: 12_250_000_000.0,
        debt_to_equity: 0.35,
        history: [
            FinancialYear { year: 2024, revenue: 9_000_000_000.0, profit: 2_100_000_000.0, fcf: 440000.0, pe: 24.0, roi: 0.14, roce: 0.16 },
            FinancialYear { year: 2023, revenue: 8_000_000_000.0, profit: 1_900_000_000.0, fcf: 420000.0, pe: 22.0, roi: 0.13, roce: 0.15 },
        ],
        description: "ManufactEx is a leader in manufacturing excellence, providing high-quality industrial products.",
        founded: 2000,
        headquarters: "Chicago, IL",
        employees: 7000,
    },
];
