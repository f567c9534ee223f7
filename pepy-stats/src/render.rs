use colored::*;

use crate::dashboard::View;
use crate::types::PackageStats;
use crate::utils::*;

const UNITS: [(u64, &str); 3] = [(1_000_000_000, "B"), (1_000_000, "M"), (1_000, "K")];

/// Short display form of a download count: `1500` -> `1.5K`,
/// `2_000_000` -> `2M`. Counts below a thousand are shown as-is.
pub fn format_count(count: u64) -> String {
    for (i, &(size, suffix)) in UNITS.iter().enumerate() {
        if count < size {
            continue;
        }
        let tenths = to_tenths(count, size);
        // 999_950 rounds to 1000.0K, which reads better as 1M
        if tenths >= 10_000 && i > 0 {
            let (bigger, bigger_suffix) = UNITS[i - 1];
            return with_suffix(to_tenths(count, bigger), bigger_suffix);
        }
        return with_suffix(tenths, suffix);
    }
    count.to_string()
}

fn to_tenths(count: u64, size: u64) -> u64 {
    ((count as u128 * 10 + size as u128 / 2) / size as u128) as u64
}

fn with_suffix(tenths: u64, suffix: &str) -> String {
    if tenths % 10 == 0 {
        format!("{}{}", tenths / 10, suffix)
    } else {
        format!("{}.{}{}", tenths / 10, tenths % 10, suffix)
    }
}

/// Text of the stats panel, before any colouring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsPanel {
    pub title: String,
    pub total_downloads: String,
    pub version_count: usize,
    pub versions: String,
    pub daily: Vec<DailyRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyRow {
    pub date: String,
    /// `(version, formatted count)` pairs.
    pub counts: Vec<(String, String)>,
}

impl StatsPanel {
    pub fn from_stats(stats: &PackageStats) -> Self {
        let versions = if stats.versions.is_empty() {
            "none".to_string()
        } else {
            stats.versions.join(", ")
        };

        let daily = stats
            .downloads
            .iter()
            .map(|(date, per_version)| DailyRow {
                date: date.clone(),
                counts: per_version
                    .iter()
                    .map(|(version, count)| (version.clone(), format_count(*count)))
                    .collect(),
            })
            .collect();

        Self {
            title: stats.id.clone(),
            total_downloads: stats.total_downloads.to_string(),
            version_count: stats.versions.len(),
            versions,
            daily,
        }
    }

    pub fn print(&self) {
        println!("\n{} {}", "📦".cyan(), self.title.green().bold());
        println!("{}", "═".repeat(80).cyan());

        println!("\n  📥 Total Downloads: {}", self.total_downloads.yellow().bold());
        println!(
            "  📌 Versions ({}): {}",
            self.version_count.to_string().cyan(),
            self.versions
        );

        println!("\n{}", "📊 Daily Downloads".cyan().bold());
        if self.daily.is_empty() {
            println!("  No daily breakdown available");
        }
        for row in &self.daily {
            println!("\n  {}", row.date.bold());
            for (version, count) in &row.counts {
                println!("    • Version {}: {} downloads", version.cyan(), count.yellow());
            }
        }

        println!("\n{}", "═".repeat(80).cyan());
    }
}

/// Print whatever the dashboard currently shows.
pub fn print_view(view: &View<'_>) {
    match view {
        View::Idle => print_info("Enter a package name to look up its downloads"),
        View::Loading(package) => print_info(&format!("Loading {}...", package)),
        View::Failed(message) => print_error(message),
        View::Loaded(stats) => StatsPanel::from_stats(stats).print(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    fn pyfilterlab() -> PackageStats {
        let mut downloads = IndexMap::new();
        downloads.insert(
            "2024-05-02".to_string(),
            IndexMap::from([("0.2.0".to_string(), 1_500)]),
        );
        downloads.insert(
            "2024-05-01".to_string(),
            IndexMap::from([("0.10.0".to_string(), 12), ("0.2.0".to_string(), 2_000_000)]),
        );
        PackageStats {
            id: "pyfilterlab".to_string(),
            total_downloads: 9_007_199_254_740_993,
            versions: vec!["0.2.0".to_string(), "0.1.0".to_string(), "0.1.1".to_string()],
            downloads,
        }
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1K");
        assert_eq!(format_count(1_049), "1K");
        assert_eq!(format_count(1_050), "1.1K");
        assert_eq!(format_count(1_500), "1.5K");
        assert_eq!(format_count(999_950), "1M");
        assert_eq!(format_count(1_234_567), "1.2M");
        assert_eq!(format_count(2_500_000), "2.5M");
        assert_eq!(format_count(3_000_000_000), "3B");
        assert_eq!(format_count(u64::MAX), "18446744073.7B");
    }

    #[test]
    fn test_panel_keeps_exact_total_and_version_count() {
        let stats = pyfilterlab();
        let panel = StatsPanel::from_stats(&stats);

        assert_eq!(panel.title, "pyfilterlab");
        assert_eq!(panel.total_downloads, "9007199254740993");
        assert_eq!(panel.total_downloads.parse::<u64>().unwrap(), stats.total_downloads);
        assert_eq!(panel.version_count, stats.versions.len());
        assert_eq!(panel.versions, "0.2.0, 0.1.0, 0.1.1");
    }

    #[test]
    fn test_panel_daily_rows_keep_order_and_use_suffixes() {
        let panel = StatsPanel::from_stats(&pyfilterlab());

        assert_eq!(
            panel.daily,
            vec![
                DailyRow {
                    date: "2024-05-02".to_string(),
                    counts: vec![("0.2.0".to_string(), "1.5K".to_string())],
                },
                DailyRow {
                    date: "2024-05-01".to_string(),
                    counts: vec![
                        ("0.10.0".to_string(), "12".to_string()),
                        ("0.2.0".to_string(), "2M".to_string()),
                    ],
                },
            ]
        );
    }

    #[test]
    fn test_panel_without_versions() {
        let stats = PackageStats {
            id: "empty".to_string(),
            total_downloads: 0,
            versions: vec![],
            downloads: IndexMap::new(),
        };
        let panel = StatsPanel::from_stats(&stats);
        assert_eq!(panel.versions, "none");
        assert_eq!(panel.version_count, 0);
        assert!(panel.daily.is_empty());
    }
}
