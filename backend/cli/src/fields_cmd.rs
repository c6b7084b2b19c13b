//! `cronguard fields`: print the positional field layout.

use cronguard_core::{field_specs, CronOptions, FieldSpec};

use crate::terminal_output::{render_table, Column};

pub fn render(options: CronOptions, color: bool) -> String {
    let columns = [
        Column::right("#"),
        Column::left("Field"),
        Column::right("Min"),
        Column::right("Max"),
        Column::left("?"),
        Column::left("Names"),
    ];
    let rows: Vec<Vec<String>> = field_specs(options)
        .iter()
        .enumerate()
        .map(|(i, spec)| row(i + 1, spec, options.alias))
        .collect();
    render_table(&columns, &rows, color)
}

fn row(position: usize, spec: &FieldSpec, alias: bool) -> Vec<String> {
    let names = match spec.aliases {
        Some(aliases) if alias => format!("{}-{}", aliases[0], aliases[aliases.len() - 1]),
        _ => "-".to_string(),
    };
    vec![
        position.to_string(),
        spec.kind.to_string(),
        spec.min.to_string(),
        spec.max.to_string(),
        (if spec.allow_question_mark { "yes" } else { "no" }).to_string(),
        names,
    ]
}
