use crate::application::summary::{CategoryTotal, DebtSummary, ParticipantShare};
use crate::domain::balances::NetBalances;
use crate::domain::settlement::Settlement;
use crate::error::Result;
use rust_decimal::Decimal;
use std::io::Write;

/// Decimal places used when printing amounts.
pub const DISPLAY_DP: u32 = 2;

fn display(amount: Decimal) -> String {
    amount.round_dp(DISPLAY_DP).normalize().to_string()
}

/// Writes results as CSV. Each `write_*` call emits its own header row.
pub struct ReportWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(sink: W) -> Self {
        let writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(sink);
        Self { writer }
    }

    /// `group,participant,balance`
    pub fn write_balances<'a>(
        &mut self,
        groups: impl IntoIterator<Item = (&'a str, &'a NetBalances)>,
    ) -> Result<()> {
        self.writer.write_record(["group", "participant", "balance"])?;
        for (group, balances) in groups {
            for (participant, balance) in balances.iter() {
                self.writer
                    .write_record([group, participant.as_str(), &*display(balance.value())])?;
            }
        }
        self.writer.flush()?;
        Ok(())
    }

    /// `group,from,to,amount`
    pub fn write_settlements<'a>(
        &mut self,
        groups: impl IntoIterator<Item = (&'a str, &'a [Settlement])>,
    ) -> Result<()> {
        self.writer.write_record(["group", "from", "to", "amount"])?;
        for (group, settlements) in groups {
            for s in settlements {
                self.writer.write_record([
                    group,
                    s.from.as_str(),
                    s.to.as_str(),
                    &*display(s.amount),
                ])?;
            }
        }
        self.writer.flush()?;
        Ok(())
    }

    /// `group,direction,counterparty,amount`, closed by two `total` rows.
    pub fn write_debt_summary(&mut self, summary: &DebtSummary) -> Result<()> {
        self.writer
            .write_record(["group", "direction", "counterparty", "amount"])?;
        for debt in &summary.owe {
            self.writer.write_record([
                debt.group.as_str(),
                "owe",
                debt.settlement.to.as_str(),
                &*display(debt.settlement.amount),
            ])?;
        }
        for debt in &summary.owed_to_you {
            self.writer.write_record([
                debt.group.as_str(),
                "owed",
                debt.settlement.from.as_str(),
                &*display(debt.settlement.amount),
            ])?;
        }
        self.writer
            .write_record(["total", "owe", "", &*display(summary.total_owe)])?;
        self.writer
            .write_record(["total", "owed", "", &*display(summary.total_owed_to_you)])?;
        self.writer.flush()?;
        Ok(())
    }

    /// `group,paid,share,net`
    pub fn write_shares<'a>(
        &mut self,
        groups: impl IntoIterator<Item = (&'a str, ParticipantShare)>,
    ) -> Result<()> {
        self.writer.write_record(["group", "paid", "share", "net"])?;
        for (group, share) in groups {
            self.writer.write_record([
                group,
                &*display(share.paid),
                &*display(share.share),
                &*display(share.net),
            ])?;
        }
        self.writer.flush()?;
        Ok(())
    }

    /// `category,total,percent`
    pub fn write_categories(&mut self, totals: &[CategoryTotal]) -> Result<()> {
        self.writer.write_record(["category", "total", "percent"])?;
        for total in totals {
            self.writer.write_record([
                total.category.as_str(),
                &*display(total.total),
                &*total.percent.to_string(),
            ])?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::participant::Participant;
    use rust_decimal_macros::dec;

    fn written(f: impl FnOnce(&mut ReportWriter<&mut Vec<u8>>)) -> String {
        let mut buf = Vec::new();
        {
            let mut writer = ReportWriter::new(&mut buf);
            f(&mut writer);
        }
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_settlements_are_rounded_for_display() {
        let settlements = vec![Settlement::new("B", "A", dec!(33.333333))];
        let out = written(|w| {
            w.write_settlements([("trip", settlements.as_slice())])
                .unwrap()
        });
        assert_eq!(out, "group,from,to,amount\ntrip,B,A,33.33\n");
    }

    #[test]
    fn test_balances_rows() {
        let mut net = NetBalances::new();
        net.credit(&Participant::from("A"), dec!(60));
        net.debit(&Participant::from("B"), dec!(60));
        let out = written(|w| w.write_balances([("trip", &net)]).unwrap());
        assert_eq!(out, "group,participant,balance\ntrip,A,60\ntrip,B,-60\n");
    }

    #[test]
    fn test_debt_summary_rows() {
        let mut summary = DebtSummary::default();
        summary.record("B", "trip", &[Settlement::new("B", "A", dec!(30))]);
        let out = written(|w| w.write_debt_summary(&summary).unwrap());
        assert_eq!(
            out,
            "group,direction,counterparty,amount\ntrip,owe,A,30\ntotal,owe,,30\ntotal,owed,,0\n"
        );
    }

    #[test]
    fn test_share_rows() {
        let share = ParticipantShare {
            paid: dec!(0),
            share: dec!(33.333333),
            net: dec!(-33.333333),
        };
        let out = written(|w| w.write_shares([("trip", share)]).unwrap());
        assert_eq!(out, "group,paid,share,net
trip,0,33.33,-33.33
");
    }

    #[test]
    fn test_category_rows() {
        let totals = vec![CategoryTotal {
            category: "Food".into(),
            total: dec!(12.50),
            percent: 100,
        }];
        let out = written(|w| w.write_categories(&totals).unwrap());
        assert_eq!(out, "category,total,percent\nFood,12.5,100\n");
    }
}
