use crate::config::UnlistedPayer;
use crate::domain::balances::NetBalances;
use crate::domain::expense::SharedExpense;
use crate::domain::participant::Participant;

/// Folds shared expenses into net balances.
///
/// Every roster member starts at zero, so someone with no activity still shows
/// up with a zero balance. Expenses whose `involved` list is empty or names a
/// participant twice are skipped without error. Involved participants missing
/// from the roster are appended; an unlisted payer is handled per `unlisted_payer`.
///
/// The result does not depend on expense order, except for the position of
/// appended participants, which follows first appearance.
pub fn compute_net_balances(
    expenses: &[SharedExpense],
    participants: &[Participant],
    unlisted_payer: UnlistedPayer,
) -> NetBalances {
    let mut net = NetBalances::with_roster(participants);

    for expense in expenses {
        let Some(share) = expense.share() else {
            tracing::debug!(expense = %expense.id, "skipping expense without a valid involved set");
            continue;
        };

        let payer_listed = participants.contains(&expense.payer);
        if !payer_listed && unlisted_payer == UnlistedPayer::Reject {
            tracing::warn!(
                expense = %expense.id,
                payer = %expense.payer,
                "rejecting expense paid by a participant outside the roster"
            );
            continue;
        }

        for person in &expense.involved {
            net.debit(person, share);
        }

        if payer_listed || unlisted_payer == UnlistedPayer::Extend {
            net.credit(&expense.payer, expense.amount);
        } else {
            tracing::debug!(
                expense = %expense.id,
                payer = %expense.payer,
                "dropping credit for unlisted payer"
            );
        }
    }

    net
}
