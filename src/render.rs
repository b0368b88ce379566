use crate::dashboard::Dashboard;
use colored::Colorize;
use comfy_table::{Attribute, Cell, Color, Table};

/// Header block: shield icon and badge driven solely by the master
/// switch, plus the live status line.
#[must_use]
pub fn render_header(dash: &Dashboard) -> String {
    let shield = if dash.protection_enabled {
        "🛡".green()
    } else {
        "🛡".dimmed()
    };
    let badge = if dash.protection_enabled {
        "[ ACTIVE ]".green().bold()
    } else {
        "[ INACTIVE ]".yellow().bold()
    };
    let status = format!(
        "Protection is {} - {} items secured",
        if dash.protection_enabled {
            "active"
        } else {
            "inactive"
        },
        dash.protected_count()
    );

    format!(
        "{shield} {}  {badge}\n{status}",
        "File Protection System".bold()
    )
}

/// Control panel line showing the master switch.
#[must_use]
pub fn render_control_panel(dash: &Dashboard) -> String {
    let switch = if dash.protection_enabled {
        "[ON ]".green()
    } else {
        "[OFF]".yellow()
    };
    format!("Protection Enabled {switch}   (toggle with 'system')")
}

/// Files section: header line plus one table row per record, in
/// insertion order.
#[must_use]
pub fn render_files(dash: &Dashboard) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", "Desktop Files".bold()));
    out.push_str(&format!(
        "{} protected items   ('add' to add a file)\n",
        dash.protected_count()
    ));

    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_HORIZONTAL_ONLY);
    table.set_header(vec!["Id", "Name", "Status", "Size", "Modified", "Toggle"]);

    for file in &dash.files {
        let status = if file.protected {
            Cell::new("Protected")
                .fg(Color::Green)
                .add_attribute(Attribute::Bold)
        } else {
            Cell::new("")
        };
        // Toggle affordance mirrors the row's current state
        let toggle = if file.protected {
            Cell::new("✔").fg(Color::Green)
        } else {
            Cell::new("🛡").fg(Color::DarkGrey)
        };

        table.add_row(vec![
            Cell::new(&file.id),
            Cell::new(format!("{} {}", file.category.icon(), file.name)),
            status,
            Cell::new(file.size.as_deref().unwrap_or("-")),
            Cell::new(&file.modified),
            toggle,
        ]);
    }

    out.push_str(&table.to_string());
    out
}
