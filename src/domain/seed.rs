//! Built-in seed content used until staff publish their own. The public site
//! must always have something to render, even on a fresh install.

use crate::domain::model::{CaseStudy, CatalogItem, PricingTier, Testimonial};

pub fn default_items() -> Vec<CatalogItem> {
    vec![
        CatalogItem {
            id: "notebook-executive".to_string(),
            name: "Executive Leather Journal".to_string(),
            description: "A5 vegan leather journal with lay-flat binding and a ribbon marker."
                .to_string(),
            category: "notebooks".to_string(),
            price_from: 18.0,
            image: "/images/products/notebook-executive.jpg".to_string(),
            before_image: Some("/images/products/notebook-executive-blank.jpg".to_string()),
            after_image: Some("/images/products/notebook-executive-branded.jpg".to_string()),
            branding_options: vec![
                "Foil deboss".to_string(),
                "Blind emboss".to_string(),
                "Belly band".to_string(),
            ],
            pricing_tiers: vec![
                PricingTier {
                    name: "Starter".to_string(),
                    quantity: "25-99 units".to_string(),
                    price: 24.0,
                },
                PricingTier {
                    name: "Corporate".to_string(),
                    quantity: "100-499 units".to_string(),
                    price: 20.0,
                },
                PricingTier {
                    name: "Enterprise".to_string(),
                    quantity: "500+ units".to_string(),
                    price: 18.0,
                },
            ],
        },
        CatalogItem {
            id: "tumbler-thermal".to_string(),
            name: "Thermal Travel Tumbler".to_string(),
            description: "Double-walled 450ml stainless tumbler, keeps drinks hot for 6 hours."
                .to_string(),
            category: "drinkware".to_string(),
            price_from: 14.0,
            image: "/images/products/tumbler-thermal.jpg".to_string(),
            before_image: None,
            after_image: None,
            branding_options: vec!["Laser engraving".to_string(), "Full-wrap print".to_string()],
            pricing_tiers: vec![
                PricingTier {
                    name: "Starter".to_string(),
                    quantity: "50-199 units".to_string(),
                    price: 17.0,
                },
                PricingTier {
                    name: "Corporate".to_string(),
                    quantity: "200+ units".to_string(),
                    price: 14.0,
                },
            ],
        },
        CatalogItem {
            id: "tote-canvas".to_string(),
            name: "Heavy Canvas Tote".to_string(),
            description: "12oz natural canvas tote with reinforced handles and gusset base."
                .to_string(),
            category: "bags".to_string(),
            price_from: 9.0,
            image: "/images/products/tote-canvas.jpg".to_string(),
            before_image: None,
            after_image: None,
            branding_options: vec!["Screen print".to_string(), "Embroidery".to_string()],
            pricing_tiers: vec![PricingTier {
                name: "Corporate".to_string(),
                quantity: "100+ units".to_string(),
                price: 9.0,
            }],
        },
        CatalogItem {
            id: "charger-wireless".to_string(),
            name: "Bamboo Wireless Charger".to_string(),
            description: "10W fast wireless charging pad in a sustainably sourced bamboo shell."
                .to_string(),
            category: "tech".to_string(),
            price_from: 22.0,
            image: "/images/products/charger-wireless.jpg".to_string(),
            before_image: None,
            after_image: None,
            branding_options: vec!["Laser engraving".to_string(), "Pad print".to_string()],
            pricing_tiers: vec![],
        },
        CatalogItem {
            id: "hamper-celebration".to_string(),
            name: "Celebration Gift Hamper".to_string(),
            description:
                "Curated hamper: artisan chocolate, single-origin coffee, branded keepsake box."
                    .to_string(),
            category: "hampers".to_string(),
            price_from: 45.0,
            image: "/images/products/hamper-celebration.jpg".to_string(),
            before_image: None,
            after_image: None,
            branding_options: vec![
                "Branded keepsake box".to_string(),
                "Personalized card".to_string(),
            ],
            pricing_tiers: vec![PricingTier {
                name: "Corporate".to_string(),
                quantity: "20+ hampers".to_string(),
                price: 45.0,
            }],
        },
    ]
}

pub fn default_testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            id: "t-amara".to_string(),
            quote: "The onboarding kits arrived branded, boxed, and ahead of schedule. Our new \
                    hires talk about them for weeks."
                .to_string(),
            author: "Amara Otieno".to_string(),
            role: "Head of People".to_string(),
            company: "Savannah Fintech".to_string(),
            rating: Some(5),
        },
        Testimonial {
            id: "t-daniel".to_string(),
            quote: "One supplier, one invoice, three hundred client gifts. Exactly what December \
                    needed."
                .to_string(),
            author: "Daniel Kim".to_string(),
            role: "Marketing Director".to_string(),
            company: "Brightline Logistics".to_string(),
            rating: Some(5),
        },
        Testimonial {
            id: "t-lucia".to_string(),
            quote: "Quality held up across the whole order, not just the samples.".to_string(),
            author: "Lucia Mwangi".to_string(),
            role: "Events Lead".to_string(),
            company: "Meridian Advisory".to_string(),
            rating: Some(4),
        },
    ]
}

pub fn default_case_studies() -> Vec<CaseStudy> {
    vec![
        CaseStudy {
            id: "cs-fintech-onboarding".to_string(),
            title: "Onboarding Kits for a Scaling Fintech".to_string(),
            client: "Savannah Fintech".to_string(),
            description: "250 welcome kits with branded journals, drinkware, and a handwritten \
                          note, shipped to four offices."
                .to_string(),
            before_image: "/images/cases/fintech-before.jpg".to_string(),
            after_image: "/images/cases/fintech-after.jpg".to_string(),
            results: vec![
                "250 kits delivered in 3 weeks".to_string(),
                "4 offices, single consolidated shipment each".to_string(),
                "92% of new hires posted or shared their kit".to_string(),
            ],
        },
        CaseStudy {
            id: "cs-yearend-hampers".to_string(),
            title: "Year-End Client Hampers".to_string(),
            client: "Brightline Logistics".to_string(),
            description: "300 curated hampers with client-specific cards, fulfilled door-to-door \
                          in two weeks."
                .to_string(),
            before_image: "/images/cases/hampers-before.jpg".to_string(),
            after_image: "/images/cases/hampers-after.jpg".to_string(),
            results: vec![
                "300 hampers, zero misdeliveries".to_string(),
                "Client renewal rate up 11% the following quarter".to_string(),
            ],
        },
    ]
}
