//! In-memory customer/vendor directory.
//!
//! The dashboard ships with a demo dataset instead of a partner database.
//! Lookups by id fall back to a designated default record on a miss, and the
//! caller can tell the two cases apart via [`Lookup`].

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use order_core::LineItem;
use rust_decimal::Decimal;

use crate::models::{AccountStatus, Customer, CustomerProfile, ProductLine, Vendor, VendorProfile};

/// Result of a keyed directory lookup.
///
/// `Fallback` carries the designated default record substituted on a miss;
/// views surface that distinction rather than silently presenting the
/// default as a hit.
#[derive(Debug, Clone)]
pub enum Lookup<T> {
    Exact(T),
    Fallback(T),
}

impl<T> Lookup<T> {
    pub fn record(&self) -> &T {
        match self {
            Lookup::Exact(record) | Lookup::Fallback(record) => record,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Lookup::Fallback(_))
    }

    pub fn into_record(self) -> T {
        match self {
            Lookup::Exact(record) | Lookup::Fallback(record) => record,
        }
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

fn product(id: i64, name: &str, qty: u32, unit_price: i64, total: i64) -> ProductLine {
    ProductLine {
        id,
        name: name.to_string(),
        qty,
        unit_price: Decimal::from(unit_price),
        total: Decimal::from(total),
    }
}

#[allow(clippy::too_many_arguments)]
fn line_item(
    id: i64,
    product: &str,
    description: &str,
    category: &str,
    quantity: u32,
    unit_price: i64,
    tax_percent: i64,
) -> LineItem {
    LineItem {
        id,
        product: product.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        quantity,
        unit_price: Decimal::from(unit_price),
        tax_percent: Decimal::from(tax_percent),
    }
}

static CUSTOMERS: Lazy<Vec<Customer>> = Lazy::new(|| {
    vec![
        Customer {
            id: 1,
            customer_name: "Rajesh Kumar".to_string(),
            company_name: "Kumar Interiors Pvt Ltd".to_string(),
            email: "rajesh@kumarinteriors.com".to_string(),
            phone: "+91 98765 43210".to_string(),
            order_number: "ORD-2024-001".to_string(),
            order_date: date(2024, 1, 15),
            delivery_date: date(2024, 2, 15),
            amount: Decimal::from(89_200),
            balance: Decimal::from(25_000),
            status: AccountStatus::Pending,
            products: vec![
                product(1, "Executive Office Chair", 2, 15_500, 36_580),
                product(2, "Wooden Dining Table", 1, 28_500, 33_630),
                product(3, "Study Desk", 1, 16_000, 18_880),
            ],
        },
        Customer {
            id: 2,
            customer_name: "Priya Sharma".to_string(),
            company_name: "Sharma Hospitality Group".to_string(),
            email: "priya@sharmahotels.com".to_string(),
            phone: "+91 87654 32109".to_string(),
            order_number: "ORD-2024-002".to_string(),
            order_date: date(2024, 1, 20),
            delivery_date: date(2024, 2, 10),
            amount: Decimal::from(156_400),
            balance: Decimal::from(156_400),
            status: AccountStatus::Overdue,
            products: vec![
                product(1, "Modern Sofa Set", 2, 45_000, 106_200),
                product(2, "Coffee Table", 3, 12_000, 42_480),
                product(3, "Bookshelf Unit", 1, 8_500, 10_020),
            ],
        },
    ]
});

static CUSTOMER_PROFILES: Lazy<Vec<CustomerProfile>> = Lazy::new(|| {
    vec![
        CustomerProfile {
            id: 1,
            name: "Rajesh Kumar".to_string(),
            email: "rajesh@kumarinteriors.com".to_string(),
            phone: "+91 98765 43210".to_string(),
            address: "123 Business Park, Corporate City, CC 560001".to_string(),
            active: true,
        },
        CustomerProfile {
            id: 2,
            name: "Priya Sharma".to_string(),
            email: "priya@sharmahotels.com".to_string(),
            phone: "+91 87654 32109".to_string(),
            address: "456 Hotel Plaza, Hospitality District, HD 560002".to_string(),
            active: true,
        },
    ]
});

static VENDORS: Lazy<Vec<Vendor>> = Lazy::new(|| {
    vec![
        Vendor {
            id: 1,
            partner_name: "Premium Wood Suppliers".to_string(),
            account_name: "PWS Trading Co.".to_string(),
            email: "contact@premiumwood.com".to_string(),
            phone: "+91 98765 43210".to_string(),
            bill_number: "PWS-2024-001".to_string(),
            bill_date: date(2024, 1, 15),
            due_date: date(2024, 2, 15),
            amount: Decimal::from(98_176),
            balance: Decimal::from(45_000),
            status: AccountStatus::Pending,
            products: vec![
                product(1, "Premium Teak Wood Planks", 25, 1_800, 53_100),
                product(2, "Mahogany Wood Sheets", 15, 2_200, 38_940),
                product(3, "Wood Polish & Stain", 8, 650, 6_136),
            ],
        },
        Vendor {
            id: 2,
            partner_name: "Elite Hardware Solutions".to_string(),
            account_name: "EHS Manufacturing".to_string(),
            email: "orders@elitehardware.com".to_string(),
            phone: "+91 87654 32109".to_string(),
            bill_number: "EHS-2024-002".to_string(),
            bill_date: date(2024, 1, 20),
            due_date: date(2024, 1, 25),
            amount: Decimal::from(19_913),
            balance: Decimal::from(19_913),
            status: AccountStatus::Overdue,
            products: vec![
                product(1, "Premium Metal Hinges", 100, 45, 5_310),
                product(2, "Furniture Screws Set", 50, 120, 7_080),
                product(3, "Steel Brackets", 75, 85, 7_523),
            ],
        },
    ]
});

static VENDOR_PROFILES: Lazy<Vec<VendorProfile>> = Lazy::new(|| {
    vec![
        VendorProfile {
            id: 1,
            partner_name: "Premium Wood Suppliers".to_string(),
            account_name: "PWS Trading Co.".to_string(),
            email: "contact@premiumwood.com".to_string(),
            phone: "+91 98765 43210".to_string(),
            vendor_number: "VND-001".to_string(),
            address: "123 Wood Street, Timber City, TC 560001".to_string(),
            gst: "29ABCDE1234F1Z5".to_string(),
            total_pending: Decimal::from(45_000),
            total_orders: 12,
        },
        VendorProfile {
            id: 2,
            partner_name: "Elite Hardware Solutions".to_string(),
            account_name: "EHS Manufacturing".to_string(),
            email: "orders@elitehardware.com".to_string(),
            phone: "+91 87654 32109".to_string(),
            vendor_number: "VND-002".to_string(),
            address: "456 Steel Avenue, Metal Park, MP 560002".to_string(),
            gst: "29XYZAB5678G2H6".to_string(),
            total_pending: Decimal::from(19_913),
            total_orders: 8,
        },
    ]
});

fn lookup<T: Clone>(records: &[T], matches: impl Fn(&T) -> bool) -> Lookup<T> {
    match records.iter().find(|record| matches(record)) {
        Some(record) => Lookup::Exact(record.clone()),
        // The first record is the designated default.
        None => Lookup::Fallback(records[0].clone()),
    }
}

pub fn customers() -> &'static [Customer] {
    &CUSTOMERS
}

pub fn vendors() -> &'static [Vendor] {
    &VENDORS
}

pub fn customer_profile(id: i64) -> Lookup<CustomerProfile> {
    lookup(&CUSTOMER_PROFILES, |profile| profile.id == id)
}

pub fn vendor_profile(id: i64) -> Lookup<VendorProfile> {
    lookup(&VENDOR_PROFILES, |profile| profile.id == id)
}

/// The purchase-order review cart, seeded once per service instance.
pub fn purchase_order_cart() -> Vec<LineItem> {
    vec![
        line_item(
            1,
            "Executive Office Chair",
            "Ergonomic leather chair with lumbar support",
            "Office Furniture",
            2,
            15_500,
            18,
        ),
        line_item(
            2,
            "Wooden Dining Table",
            "6-seater solid wood dining table",
            "Dining Furniture",
            1,
            28_500,
            18,
        ),
        line_item(
            3,
            "Modern Sofa Set",
            "3-piece L-shaped sofa with cushions",
            "Living Room",
            1,
            45_000,
            18,
        ),
        line_item(
            4,
            "Study Desk",
            "Computer desk with drawers and cable management",
            "Office Furniture",
            3,
            12_000,
            18,
        ),
        line_item(5, "Bookshelf Unit", "5-tier wooden bookshelf", "Storage", 2, 8_500, 12),
    ]
}

/// Open order cart for one customer. Customer orders carry the standard 18%
/// goods rate on every line.
pub fn customer_cart(id: i64) -> Vec<LineItem> {
    match id {
        2 => vec![
            line_item(
                1,
                "Hotel Lobby Sofa",
                "3-seater premium leather sofa",
                "Living Room",
                4,
                45_000,
                18,
            ),
            line_item(
                2,
                "Reception Desk",
                "Custom designed reception counter",
                "Office Furniture",
                1,
                75_000,
                18,
            ),
        ],
        _ => vec![
            line_item(
                1,
                "Executive Office Chair",
                "Ergonomic leather chair with lumbar support",
                "Office Furniture",
                2,
                15_500,
                18,
            ),
            line_item(
                2,
                "Wooden Dining Table",
                "6-seater solid wood dining table",
                "Dining Furniture",
                1,
                28_500,
                18,
            ),
            line_item(
                3,
                "Study Desk",
                "Modern study desk with drawers",
                "Office Furniture",
                3,
                12_000,
                18,
            ),
        ],
    }
}

/// Open purchase cart for one vendor.
pub fn vendor_cart(id: i64) -> Vec<LineItem> {
    match id {
        2 => vec![
            line_item(
                1,
                "Premium Metal Hinges",
                "Heavy-duty cabinet hinges",
                "Hardware",
                100,
                45,
                18,
            ),
            line_item(
                2,
                "Furniture Screws Set",
                "Assorted furniture screws and bolts",
                "Hardware",
                50,
                120,
                18,
            ),
            line_item(
                3,
                "Steel Brackets",
                "Wall mounting steel brackets",
                "Hardware",
                75,
                85,
                18,
            ),
        ],
        _ => vec![
            line_item(
                1,
                "Premium Teak Wood Planks",
                "High-quality teak wood planks for furniture making",
                "Raw Materials",
                25,
                1_800,
                18,
            ),
            line_item(
                2,
                "Mahogany Wood Sheets",
                "Premium mahogany wood sheets",
                "Raw Materials",
                15,
                2_200,
                18,
            ),
            line_item(
                3,
                "Wood Polish & Stain",
                "Premium finishing materials",
                "Finishing",
                8,
                650,
                18,
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_ids_resolve_exactly() {
        let profile = customer_profile(2);
        assert!(!profile.is_fallback());
        assert_eq!(profile.record().name, "Priya Sharma");

        let vendor = vendor_profile(1);
        assert!(!vendor.is_fallback());
        assert_eq!(vendor.record().vendor_number, "VND-001");
    }

    #[test]
    fn unknown_ids_fall_back_to_the_default_record() {
        let profile = customer_profile(99);
        assert!(profile.is_fallback());
        assert_eq!(profile.record().id, 1);

        let vendor = vendor_profile(0);
        assert!(vendor.is_fallback());
        assert_eq!(vendor.record().id, 1);
    }

    #[test]
    fn demo_datasets_are_well_formed() {
        assert_eq!(customers().len(), 2);
        assert_eq!(vendors().len(), 2);
        for items in [purchase_order_cart(), customer_cart(1), vendor_cart(2)] {
            assert!(!items.is_empty());
            assert!(items.iter().all(|item| item.quantity >= 1));
        }
    }
}
