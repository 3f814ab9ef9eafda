use crate::domain::model::{Bar, ChartKind, ChartSpec, DisplayMode, Series};
use crate::domain::ports::ChartDisplay;
use crate::utils::error::{LessonError, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::CrosstermBackend,
    buffer::Buffer,
    layout::{Constraint, Rect},
    symbols,
    text::Line,
    widgets::{
        Axis, Bar as BarItem, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType,
        LegendPosition, Widget,
    },
    Terminal,
};
use std::io::{self, IsTerminal};

const MARKERS: [symbols::Marker; 3] = [
    symbols::Marker::Braille,
    symbols::Marker::Dot,
    symbols::Marker::Block,
];

/// 用 ratatui 繪製課程圖表
#[derive(Debug, Clone)]
pub struct TerminalDisplay {
    mode: DisplayMode,
    width: u16,
    height: u16,
}

impl TerminalDisplay {
    pub fn new(mode: DisplayMode, width: u16, height: u16) -> Self {
        Self {
            mode,
            width,
            height,
        }
    }

    fn show_inline(&self, chart: &ChartSpec) {
        for line in render_to_lines(chart, self.width, self.height) {
            println!("{}", line);
        }
    }

    fn show_interactive(&self, chart: &ChartSpec) -> Result<()> {
        enable_raw_mode().map_err(render_error)?;
        let mut stdout = io::stdout();
        if let Err(e) = stdout.execute(EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(render_error(e));
        }

        let result = Terminal::new(CrosstermBackend::new(io::stdout()))
            .and_then(|mut terminal| wait_for_close(&mut terminal, chart));

        // 無論繪製是否成功都要還原終端
        let _ = disable_raw_mode();
        let _ = io::stdout().execute(LeaveAlternateScreen);

        result.map_err(render_error)
    }
}

impl Default for TerminalDisplay {
    fn default() -> Self {
        Self::new(DisplayMode::default(), 80, 24)
    }
}

impl ChartDisplay for TerminalDisplay {
    fn show(&self, chart: &ChartSpec) -> Result<()> {
        tracing::debug!("Showing chart '{}' in {:?} mode", chart.title, self.mode);

        match self.mode {
            DisplayMode::Json => {
                println!("{}", serde_json::to_string_pretty(chart)?);
                Ok(())
            }
            DisplayMode::Inline => {
                self.show_inline(chart);
                Ok(())
            }
            DisplayMode::Interactive if !io::stdout().is_terminal() => {
                tracing::warn!("⚠️ stdout is not a terminal, printing chart inline");
                self.show_inline(chart);
                Ok(())
            }
            DisplayMode::Interactive => self.show_interactive(chart),
        }
    }
}

fn render_error(e: io::Error) -> LessonError {
    LessonError::RenderError {
        message: e.to_string(),
    }
}

fn wait_for_close<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    chart: &ChartSpec,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| {
            let area = f.area();
            render_chart(chart, area, f.buffer_mut());
        })?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter => return Ok(()),
                _ => {}
            }
        }
    }
}

/// 將圖表繪入離屏緩衝區並轉成文字行（去除行尾空白）
pub fn render_to_lines(chart: &ChartSpec, width: u16, height: u16) -> Vec<String> {
    let area = Rect::new(0, 0, width, height);
    let mut buffer = Buffer::empty(area);
    render_chart(chart, area, &mut buffer);

    buffer
        .content
        .chunks(area.width.max(1) as usize)
        .map(|row| {
            row.iter()
                .map(|cell| cell.symbol())
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect()
}

pub fn render_chart(chart: &ChartSpec, area: Rect, buf: &mut Buffer) {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .title(Line::from(chart.title.as_str()).centered());

    match &chart.kind {
        ChartKind::Bar { bars } => {
            // 長條圖沒有座標軸，y 軸標題放在下框
            if let Some(y_label) = &chart.y_label {
                block = block.title_bottom(Line::from(y_label.as_str()));
            }
            render_bars(bars, block, area, buf);
        }
        ChartKind::Line { series, legend } => {
            render_lines(chart, series, *legend, block, area, buf);
        }
    }
}

fn render_bars(bars: &[Bar], block: Block<'_>, area: Rect, buf: &mut Buffer) {
    let items: Vec<BarItem> = bars
        .iter()
        .map(|bar| {
            BarItem::default()
                .label(Line::from(bar.label.as_str()))
                .value(bar.value)
        })
        .collect();

    let max = bars.iter().map(|bar| bar.value).max().unwrap_or(0).max(1);
    let (bar_width, bar_gap) = bar_layout(bars, area.width.saturating_sub(2));

    BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&items))
        .bar_width(bar_width)
        .bar_gap(bar_gap)
        .max(max)
        .render(area, buf);
}

/// 長條寬度至少容納最長標籤，放不下時先拿掉間距再縮窄
fn bar_layout(bars: &[Bar], inner_width: u16) -> (u16, u16) {
    let count = bars.len().max(1) as u16;
    let label_width = bars
        .iter()
        .map(|bar| bar.label.chars().count())
        .max()
        .unwrap_or(1)
        .min(u16::MAX as usize) as u16;

    let fitted = (inner_width.saturating_sub(count - 1) / count).clamp(1, 9);
    let width = fitted.max(label_width);

    if count * width + (count - 1) <= inner_width {
        (width, 1)
    } else if count * width <= inner_width {
        (width, 0)
    } else {
        ((inner_width / count).max(1), 0)
    }
}

fn render_lines(
    chart: &ChartSpec,
    series: &[Series],
    legend: bool,
    block: Block<'_>,
    area: Rect,
    buf: &mut Buffer,
) {
    let datasets: Vec<Dataset> = series
        .iter()
        .zip(MARKERS.iter().cycle())
        .map(|(s, marker)| {
            Dataset::default()
                .name(s.name.as_str())
                .marker(*marker)
                .graph_type(GraphType::Line)
                .data(&s.points)
        })
        .collect();

    let ([x_min, x_max], [y_min, y_max]) = chart.bounds().unwrap_or(([0.0, 1.0], [0.0, 1.0]));

    let mut x_axis = Axis::default()
        .bounds([x_min, x_max])
        .labels(axis_labels(x_min, x_max));
    if let Some(label) = &chart.x_label {
        x_axis = x_axis.title(label.as_str());
    }

    let mut y_axis = Axis::default()
        .bounds([y_min, y_max])
        .labels(axis_labels(y_min, y_max));
    if let Some(label) = &chart.y_label {
        y_axis = y_axis.title(label.as_str());
    }

    Chart::new(datasets)
        .block(block)
        .x_axis(x_axis)
        .y_axis(y_axis)
        .legend_position(legend.then_some(LegendPosition::TopLeft))
        .hidden_legend_constraints((Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)))
        .render(area, buf);
}

fn axis_labels(min: f64, max: f64) -> Vec<String> {
    let mid = (min + max) / 2.0;
    [min, mid, max].iter().map(|v| format_tick(*v)).collect()
}

fn format_tick(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.1}", value)
    }
}
