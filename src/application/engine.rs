use crate::application::aggregator::compute_net_balances;
use crate::application::resolver::resolve_settlements;
use crate::application::summary::DebtSummary;
use crate::application::tracker::SettlementTracker;
use crate::config::SettleConfig;
use crate::domain::balances::NetBalances;
use crate::domain::group::Group;
use crate::domain::ports::SettledStoreBox;
use crate::domain::settlement::Settlement;
use crate::error::{Result, SettleError};

/// Runs the full pipeline for a group: aggregate, resolve, drop what was paid.
///
/// The computation itself is pure; the only state lives behind the injected
/// [`SettledStoreBox`].
pub struct SettlementEngine {
    config: SettleConfig,
    tracker: SettlementTracker,
}

impl SettlementEngine {
    /// Creates a new `SettlementEngine`.
    ///
    /// # Arguments
    ///
    /// * `config` - Name and unlisted-payer policies.
    /// * `settled_store` - Where paid settlements are remembered.
    pub fn new(config: SettleConfig, settled_store: SettledStoreBox) -> Self {
        Self {
            config,
            tracker: SettlementTracker::new(settled_store),
        }
    }

    pub fn balances(&self, group: &Group) -> NetBalances {
        compute_net_balances(
            &group.expenses,
            &group.participants,
            self.config.unlisted_payer,
        )
    }

    /// Every settlement the current expenses call for, paid or not.
    pub fn settlements(&self, group: &Group) -> Vec<Settlement> {
        resolve_settlements(&self.balances(group))
    }

    /// Settlements still outstanding for `group`.
    pub async fn settle(&self, group: &Group) -> Result<Vec<Settlement>> {
        let settlements = self.settlements(group);
        let unpaid = self.tracker.filter_unpaid(&group.id, settlements).await?;
        tracing::info!(group = %group.id, outstanding = unpaid.len(), "group settled");
        Ok(unpaid)
    }

    pub async fn mark_paid(&self, group: &Group, settlement: &Settlement) -> Result<bool> {
        self.tracker.mark_paid(&group.id, settlement).await
    }

    /// Marks the currently computed settlement from `from` to `to` as paid.
    ///
    /// Fails with [`SettleError::NotFound`] if the group's balances call for no
    /// such transfer.
    pub async fn mark_paid_between(
        &self,
        group: &Group,
        from: &str,
        to: &str,
    ) -> Result<Settlement> {
        let settlement = self
            .settlements(group)
            .into_iter()
            .find(|s| s.from == from && s.to == to)
            .ok_or_else(|| {
                SettleError::NotFound(format!(
                    "No settlement from {from} to {to} in group {}",
                    group.id
                ))
            })?;
        self.tracker.mark_paid(&group.id, &settlement).await?;
        Ok(settlement)
    }

    /// Outstanding debts owed by and to `who` across `groups`, tagged with
    /// each group's name.
    pub async fn debt_summary(&self, groups: &[Group], who: &str) -> Result<DebtSummary> {
        let mut summary = DebtSummary::default();
        for group in groups {
            let unpaid = self.settle(group).await?;
            summary.record(who, &group.name, &unpaid);
        }
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{NamePolicy, UnlistedPayer};
    use crate::domain::expense::SharedExpense;
    use crate::domain::money::Balance;
    use crate::infrastructure::in_memory::InMemorySettledStore;
    use rust_decimal_macros::dec;

    fn engine() -> SettlementEngine {
        SettlementEngine::new(
            SettleConfig::default(),
            Box::new(InMemorySettledStore::new()),
        )
    }

    fn trip() -> Group {
        let mut group = Group::new("trip");
        for name in ["A", "B", "C"] {
            group.add_participant(name.into());
        }
        group
            .expenses
            .push(SharedExpense::new("1", dec!(90), "A", ["A", "B", "C"]));
        group
    }

    #[tokio::test]
    async fn test_settle_then_mark_paid() {
        let engine = engine();
        let group = trip();

        let unpaid = engine.settle(&group).await.unwrap();
        assert_eq!(unpaid.len(), 2);

        let first = unpaid[0].clone();
        assert_eq!(first, Settlement::new("B", "A", dec!(30)));
        assert!(engine.mark_paid(&group, &first).await.unwrap());

        let unpaid = engine.settle(&group).await.unwrap();
        assert_eq!(unpaid, vec![Settlement::new("C", "A", dec!(30))]);
    }

    #[tokio::test]
    async fn test_mark_paid_between() {
        let engine = engine();
        let group = trip();

        let settlement = engine.mark_paid_between(&group, "C", "A").await.unwrap();
        assert_eq!(settlement.amount, dec!(30));

        let unpaid = engine.settle(&group).await.unwrap();
        assert_eq!(unpaid, vec![Settlement::new("B", "A", dec!(30))]);
    }

    #[tokio::test]
    async fn test_mark_paid_between_unknown_pair() {
        let engine = engine();
        let result = engine.mark_paid_between(&trip(), "A", "B").await;
        assert!(matches!(result, Err(SettleError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_debt_summary_skips_paid() {
        let engine = engine();
        let trip = trip();
        let mut flat = Group::new("flat");
        flat.expenses
            .push(SharedExpense::new("9", dec!(50), "B", ["A", "B"]));
        flat.infer_roster();
        let groups = vec![trip.clone(), flat];

        let summary = engine.debt_summary(&groups, "A").await.unwrap();
        assert_eq!(summary.total_owed_to_you, dec!(60));
        assert_eq!(summary.total_owe, dec!(25));

        engine.mark_paid_between(&trip, "B", "A").await.unwrap();
        let summary = engine.debt_summary(&groups, "A").await.unwrap();
        assert_eq!(summary.total_owed_to_you, dec!(30));
    }

    #[tokio::test]
    async fn test_debt_summary_is_tagged_with_group_name() {
        let engine = engine();
        let trip = trip().with_name("Rome 2026");

        let summary = engine.debt_summary(&[trip], "A").await.unwrap();
        assert_eq!(summary.owed_to_you.len(), 2);
        assert!(summary.owed_to_you.iter().all(|d| d.group == "Rome 2026"));
    }

    #[tokio::test]
    async fn test_engine_uses_configured_payer_policy() {
        let engine = SettlementEngine::new(
            SettleConfig::new(NamePolicy::Exact, UnlistedPayer::Reject),
            Box::new(InMemorySettledStore::new()),
        );
        let mut group = Group::new("g");
        group.add_participant("A".into());
        group
            .expenses
            .push(SharedExpense::new("1", dec!(10), "Z", ["A"]));

        let balances = engine.balances(&group);
        assert_eq!(balances.get("A"), Some(Balance::ZERO));
        assert!(engine.settle(&group).await.unwrap().is_empty());
    }
}
