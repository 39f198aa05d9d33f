use serde::Serialize;

use crate::{
    content::guide::{find_tip, TIP_CATEGORIES},
    lock,
    sustainability::{CommitmentLedger, ImpactSummary},
    SiteState,
};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TipView {
    pub title: &'static str,
    pub description: &'static str,
    pub impact: u8,
    /// Shown as "Committed (N)" once non-zero.
    pub committed: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryView {
    pub title: &'static str,
    pub tips: Vec<TipView>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuideView {
    pub impact: ImpactSummary,
    pub categories: Vec<CategoryView>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitOutcome {
    pub committed: u32,
    pub impact: ImpactSummary,
}

fn guide_view(ledger: &CommitmentLedger) -> GuideView {
    GuideView {
        impact: ledger.summary(),
        categories: TIP_CATEGORIES
            .iter()
            .map(|category| CategoryView {
                title: category.title,
                tips: category
                    .tips
                    .iter()
                    .map(|tip| TipView {
                        title: tip.title,
                        description: tip.description,
                        impact: tip.impact,
                        committed: ledger.count(category.title, tip.title),
                    })
                    .collect(),
            })
            .collect(),
    }
}

pub fn get_sustainability_guide(state: &SiteState) -> Result<GuideView, String> {
    let ledger = lock(&state.commitments)?;
    Ok(guide_view(&ledger))
}

pub fn commit_to_tip(
    state: &SiteState,
    category: String,
    tip: String,
) -> Result<CommitOutcome, String> {
    if find_tip(&category, &tip).is_none() {
        log::debug!("Commitment to uncatalogued tip {:?} / {:?}", category, tip);
    }
    let mut ledger = lock(&state.commitments)?;
    let committed = ledger.commit(&category, &tip);
    Ok(CommitOutcome {
        committed,
        impact: ledger.summary(),
    })
}

pub fn get_impact_summary(state: &SiteState) -> Result<ImpactSummary, String> {
    Ok(lock(&state.commitments)?.summary())
}
