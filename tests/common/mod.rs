use rand::Rng;
use rand::rngs::StdRng;
use rust_decimal::Decimal;
use tabsettle::domain::expense::SharedExpense;
use tabsettle::domain::participant::Participant;

pub fn roster(size: usize) -> Vec<Participant> {
    (0..size).map(|i| Participant::new(format!("p{i}"))).collect()
}

/// Random expenses over `roster`, amounts in cents up to 1000.00.
pub fn random_expenses(rng: &mut StdRng, roster: &[Participant], count: usize) -> Vec<SharedExpense> {
    (0..count)
        .map(|i| {
            let payer = roster[rng.gen_range(0..roster.len())].clone();
            let involved: Vec<Participant> = roster
                .iter()
                .filter(|_| rng.gen_bool(0.6))
                .cloned()
                .collect();
            let amount = Decimal::new(rng.gen_range(0..100_000i64), 2);
            SharedExpense::new(i.to_string(), amount, payer, involved)
        })
        .collect()
}

/// Like [`random_expenses`] but every share is a whole unit, so balances stay
/// exact and no remainder sits near the settlement tolerance.
pub fn even_expenses(rng: &mut StdRng, roster: &[Participant], count: usize) -> Vec<SharedExpense> {
    (0..count)
        .map(|i| {
            let payer = roster[rng.gen_range(0..roster.len())].clone();
            let involved: Vec<Participant> = roster
                .iter()
                .filter(|_| rng.gen_bool(0.6))
                .cloned()
                .collect();
            let share = Decimal::from(rng.gen_range(1..=200i64));
            let amount = share * Decimal::from(involved.len().max(1));
            SharedExpense::new(i.to_string(), amount, payer, involved)
        })
        .collect()
}

/// Expenses of at most a few cents, so shares sit on or near the settlement
/// tolerance.
pub fn small_expenses(rng: &mut StdRng, roster: &[Participant], count: usize) -> Vec<SharedExpense> {
    (0..count)
        .map(|i| {
            let payer = roster[rng.gen_range(0..roster.len())].clone();
            let amount = Decimal::new(rng.gen_range(0..=6i64), 2);
            SharedExpense::new(i.to_string(), amount, payer, roster.to_vec())
        })
        .collect()
}
