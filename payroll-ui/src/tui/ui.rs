use payroll_core::Field;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::app::SalaryForm;

fn field_title(field: Field) -> &'static str {
    match field {
        Field::EmployeeName => "Employee Name",
        Field::Month => "Month",
        Field::PerDaySalary => "Per Day Salary (₹)",
        Field::OvertimeRate => "Overtime Salary / Hour (₹)",
        Field::DaysWorked => "Total Days Worked",
        Field::OvertimeHours => "Overtime Hours",
    }
}

pub fn draw(
    f: &mut Frame,
    form: &SalaryForm,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Length(14), // Form: six fields, two lines each
            Constraint::Min(8),     // Result card
            Constraint::Length(1),  // Footer/Help
        ])
        .split(f.area());

    let header = Paragraph::new("EMPLOYEE SALARY CALCULATOR")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(header, chunks[0]);

    draw_form(f, form, chunks[1]);
    draw_result(f, form, chunks[2]);

    let footer =
        Paragraph::new("Tab: Next field | ←/→: Pick month | Enter: Calculate | Ctrl+R: Reset | Esc: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
    f.render_widget(footer, chunks[3]);
}

fn draw_form(
    f: &mut Frame,
    form: &SalaryForm,
    area: Rect,
) {
    let mut lines: Vec<Line> = Vec::new();
    for field in Field::ALL {
        let focused = form.focus() == field;
        let marker = if focused { "> " } else { "  " };
        let label_style = if focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Blue)
        };
        let value = match field {
            Field::Month if form.selected_month().is_none() => "— select —",
            _ => form.value(field),
        };

        let mut spans = vec![
            Span::raw(marker),
            Span::styled(format!("{:<28}", field_title(field)), label_style),
            Span::styled(value.to_string(), Style::default().add_modifier(Modifier::BOLD)),
        ];
        if focused {
            spans.push(Span::styled("▏", Style::default().fg(Color::Cyan)));
        }
        lines.push(Line::from(spans));

        match form.error_for(field) {
            Some(message) => lines.push(Line::from(Span::styled(
                format!("    {message}"),
                Style::default().fg(Color::Red),
            ))),
            None => lines.push(Line::from("")),
        }
    }

    let block = Block::default()
        .title(" Salary Details ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_result(
    f: &mut Frame,
    form: &SalaryForm,
    area: Rect,
) {
    let block = Block::default()
        .title(" Salary Breakdown ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let Some(result) = form.result() else {
        f.render_widget(block, area);
        return;
    };

    let money = Style::default().fg(Color::Green);
    let lines = vec![
        Line::from(Span::styled(
            result.display_name.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(result.days_label.as_str()),
        Line::from(""),
        Line::from(vec![
            Span::raw("Regular Salary:   "),
            Span::styled(result.regular_pay.as_str(), money),
        ]),
        Line::from(vec![
            Span::raw("Overtime Salary:  "),
            Span::styled(result.overtime_pay.as_str(), money),
        ]),
        Line::from(vec![
            Span::raw("Total Salary:     "),
            Span::styled(
                result.total_pay.as_str(),
                money.add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    f.render_widget(Paragraph::new(lines).block(block), area);
}
