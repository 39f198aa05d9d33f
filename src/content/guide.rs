use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tip {
    pub title: &'static str,
    pub description: &'static str,
    /// Relative impact, in percent.
    pub impact: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TipCategory {
    pub title: &'static str,
    pub tips: &'static [Tip],
}

pub const TIP_CATEGORIES: &[TipCategory] = &[
    TipCategory {
        title: "Energy Conservation",
        tips: &[
            Tip { title: "Switch to LED bulbs", description: "LED bulbs use 75% less energy and last 25 times longer than traditional bulbs.", impact: 85 },
            Tip { title: "Unplug devices when not in use", description: "Phantom power accounts for 10% of your electricity bill.", impact: 65 },
            Tip { title: "Use natural light", description: "Open curtains during the day to reduce lighting needs.", impact: 70 },
            Tip { title: "Install smart thermostats", description: "Save up to 10-23% on heating and cooling costs.", impact: 90 },
        ],
    },
    TipCategory {
        title: "Waste Reduction",
        tips: &[
            Tip { title: "Start composting", description: "Reduce landfill waste by 30% and create nutrient-rich soil.", impact: 80 },
            Tip { title: "Use reusable bags", description: "One reusable bag can eliminate 1000 plastic bags.", impact: 75 },
            Tip { title: "Buy in bulk", description: "Reduce packaging waste and save money.", impact: 60 },
            Tip { title: "Recycle properly", description: "Learn what can and cannot be recycled in your area.", impact: 85 },
        ],
    },
    TipCategory {
        title: "Eco-Friendly Products",
        tips: &[
            Tip { title: "Choose sustainable brands", description: "Support companies with ethical and eco-friendly practices.", impact: 70 },
            Tip { title: "Buy local and seasonal", description: "Reduce carbon footprint from transportation.", impact: 75 },
            Tip { title: "Use bamboo products", description: "Bamboo is a fast-growing, renewable resource.", impact: 65 },
            Tip { title: "Invest in quality", description: "Durable products last longer and reduce waste.", impact: 80 },
        ],
    },
    TipCategory {
        title: "Mindful Consumption",
        tips: &[
            Tip { title: "Reduce water waste", description: "Fix leaks and use low-flow fixtures.", impact: 70 },
            Tip { title: "Practice minimalism", description: "Buy only what you truly need.", impact: 85 },
            Tip { title: "Repair before replacing", description: "Extend the life of your belongings.", impact: 75 },
            Tip { title: "Choose plant-based meals", description: "Reduce your carbon footprint by 50%.", impact: 90 },
        ],
    },
];

pub fn find_tip(category: &str, tip: &str) -> Option<&'static Tip> {
    TIP_CATEGORIES
        .iter()
        .find(|c| c.title == category)?
        .tips
        .iter()
        .find(|t| t.title == tip)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_four_tips() {
        assert_eq!(TIP_CATEGORIES.len(), 4);
        assert!(TIP_CATEGORIES.iter().all(|c| c.tips.len() == 4));
        assert!(TIP_CATEGORIES
            .iter()
            .flat_map(|c| c.tips)
            .all(|t| t.impact <= 100));
    }

    #[test]
    fn find_tip_matches_category_and_title() {
        let tip = find_tip("Waste Reduction", "Start composting").unwrap();
        assert_eq!(tip.impact, 80);
        assert!(find_tip("Energy Conservation", "Start composting").is_none());
    }
}
