//! Text and CSV output for finished league schedules.
//!
//! - [`team_report`]: per-team colour and sheet counts.
//! - [`week_table`]: human-readable week listing.
//! - [`write_csv`]: one row per week, one column per sheet.
//!
//! For odd team counts the last column is the bye: it holds the team
//! sitting out and is labelled `BYE`.

use std::io;

use crate::models::{Matchup, Week};
use crate::scheduler::LeagueSchedule;

/// Column labels: `week`, `sheet1..sheetK`, last relabelled `BYE` if odd.
pub fn header(sheet_count: usize, odd: bool) -> Vec<String> {
    let mut columns = vec!["week".to_string()];
    columns.extend((1..=sheet_count).map(|i| format!("sheet{i}")));
    if odd && sheet_count > 0 {
        if let Some(last) = columns.last_mut() {
            *last = "BYE".to_string();
        }
    }
    columns
}

/// Text of one sheet cell.
pub fn cell(matchup: &Matchup) -> String {
    if let Some(team) = matchup.sitting_out() {
        return team.to_string();
    }
    if matchup.is_bye() {
        return "BYE".to_string();
    }
    format!("{} v {}", matchup.red, matchup.yellow)
}

fn row(week_no: usize, week: &Week, sheet_count: usize) -> Vec<String> {
    let mut fields = Vec::with_capacity(sheet_count + 1);
    fields.push(week_no.to_string());
    fields.extend(
        (0..sheet_count).map(|s| week.sheet(s).map_or_else(|| "BYE".to_string(), cell)),
    );
    fields
}

/// Per-team report: colour counts and games per sheet.
///
/// The bye column is left out of the sheet list for odd team counts.
pub fn team_report(league: &LeagueSchedule) -> String {
    let mut out = String::from(
        "Teams and how many red/yellow stones they have, as well as how\n\
         often they play on each sheet.\n",
    );
    for usage in league.stats.teams() {
        let sheets = if league.is_odd() {
            &usage.sheets[..usage.sheets.len().saturating_sub(1)]
        } else {
            &usage.sheets[..]
        };
        out.push_str(&format!(
            "Team {}: {} red and {} yellow. Sheets = {:?}\n",
            usage.team, usage.red, usage.yellow, sheets
        ));
    }
    out
}

/// Week listing: header line, then one line per week.
pub fn week_table(league: &LeagueSchedule) -> String {
    let sheet_count = league.sheet_count();
    let mut out = header(sheet_count, league.is_odd()).join(",");
    out.push('\n');
    for (i, week) in league.schedule.weeks.iter().enumerate() {
        out.push_str(&row(i + 1, week, sheet_count).join(","));
        out.push('\n');
    }
    out
}

/// Writes the schedule as CSV.
pub fn write_csv<W: io::Write>(league: &LeagueSchedule, writer: W) -> Result<(), csv::Error> {
    let sheet_count = league.sheet_count();
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(header(sheet_count, league.is_odd()))?;
    for (i, week) in league.schedule.weeks.iter().enumerate() {
        csv.write_record(row(i + 1, week, sheet_count))?;
    }
    csv.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScheduleConfig;
    use crate::models::Team;
    use crate::scheduler::LeagueScheduler;

    fn league(n: usize) -> LeagueSchedule {
        LeagueScheduler::new(ScheduleConfig::new(n).with_shuffle_weeks(false))
            .run()
            .unwrap()
    }

    #[test]
    fn test_header() {
        assert_eq!(header(3, false), vec!["week", "sheet1", "sheet2", "sheet3"]);
        assert_eq!(header(3, true), vec!["week", "sheet1", "sheet2", "BYE"]);
        assert_eq!(header(0, true), vec!["week"]);
    }

    #[test]
    fn test_cell() {
        assert_eq!(cell(&Matchup::between(3, 9)), "3 v 9");
        assert_eq!(cell(&Matchup::new(Team::Bye, Team::real(4))), "4");
        assert_eq!(cell(&Matchup::placeholder()), "BYE");
    }

    #[test]
    fn test_csv_four_teams() {
        let mut buf = Vec::new();
        write_csv(&league(4), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "week,sheet1,sheet2\n1,1 v 4,2 v 3\n2,3 v 1,4 v 2\n3,1 v 2,3 v 4\n"
        );
    }

    #[test]
    fn test_csv_odd_bye_column() {
        let mut buf = Vec::new();
        write_csv(&league(5), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("week,sheet1,sheet2,BYE"));
        let rows: Vec<&str> = lines.collect();
        assert_eq!(rows.len(), 5);
        // first generated week: team 5 sits out
        assert!(rows[0].starts_with("1,"));
        assert!(rows[0].ends_with(",5"));
    }

    #[test]
    fn test_team_report_odd_drops_bye_column() {
        let report = team_report(&league(5));
        assert!(report.contains("Team 1: 2 red and 2 yellow. Sheets = [2, 2]"));
        assert_eq!(report.lines().count(), 2 + 5);
    }

    #[test]
    fn test_week_table_matches_csv_layout() {
        let l = league(4);
        let table = week_table(&l);
        let mut buf = Vec::new();
        write_csv(&l, &mut buf).unwrap();
        assert_eq!(table, String::from_utf8(buf).unwrap());
    }
}
