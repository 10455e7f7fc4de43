use crate::domain::balances::NetBalances;
use crate::domain::money::EPSILON;
use crate::domain::participant::Participant;
use crate::domain::settlement::Settlement;
use rust_decimal::Decimal;

/// Turns net balances into a list of debtor-to-creditor transfers.
///
/// Greedy matching: the largest debtor pays the largest creditor until one of
/// them is within [`EPSILON`] of zero, then the cursor moves on. Not guaranteed
/// to minimise the number of transfers, but deterministic: equal balances keep
/// the insertion order of `net`.
///
/// Transfers at or below [`EPSILON`] are not emitted. A participant stepped
/// past keeps at most [`EPSILON`]; the unmatched amounts of one side pile up on
/// whoever is left on the other, so after applying the result each balance is
/// within `EPSILON * (n - 1)` of zero, `n` being the number of non-zero
/// balances, plus whatever `net` fails to sum to zero.
pub fn resolve_settlements(net: &NetBalances) -> Vec<Settlement> {
    let mut creditors: Vec<(Participant, Decimal)> = Vec::new();
    let mut debtors: Vec<(Participant, Decimal)> = Vec::new();
    for (participant, balance) in net.iter() {
        if balance.is_creditor() {
            creditors.push((participant.clone(), balance.value()));
        } else if balance.is_debtor() {
            debtors.push((participant.clone(), balance.value()));
        }
    }

    // Stable sorts: ties stay in insertion order.
    creditors.sort_by(|a, b| b.1.cmp(&a.1));
    debtors.sort_by(|a, b| a.1.cmp(&b.1));

    let mut settlements = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < debtors.len() && j < creditors.len() {
        let amount = (-debtors[i].1).min(creditors[j].1);
        let emitted = amount > EPSILON;
        if emitted {
            settlements.push(Settlement::new(
                debtors[i].0.clone(),
                creditors[j].0.clone(),
                amount,
            ));
            debtors[i].1 += amount;
            creditors[j].1 -= amount;
        }

        let debtor_done = debtors[i].1.abs() < EPSILON;
        let creditor_done = creditors[j].1.abs() < EPSILON;
        if debtor_done {
            i += 1;
        }
        if creditor_done {
            j += 1;
        }

        // A remaining balance of exactly EPSILON is neither emitted nor
        // advanced past; step over the smaller side to guarantee progress.
        if !emitted && !debtor_done && !creditor_done {
            if -debtors[i].1 <= creditors[j].1 {
                i += 1;
            } else {
                j += 1;
            }
        }
    }

    settlements
}
