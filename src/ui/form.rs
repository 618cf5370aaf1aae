// ============================================================
// Layer 1 — Form State
// ============================================================
// The terminal form's state and key handling, kept free of any
// drawing so it can be tested without a terminal.
//
// Thirteen controls, top to bottom in the order the form shows
// them. Dropdowns hold an index into their choice list; the two
// free numeric inputs hold the text typed so far (empty reads
// as 0). The only other state is which control has focus and
// the outcome of the last submission.

use crossterm::event::KeyCode;

use crate::application::form_options::FormOptions;
use crate::application::predict_use_case::{PredictUseCase, PredictionOutcome};
use crate::domain::error::PredictError;
use crate::domain::laptop::LaptopSpec;
use crate::domain::traits::PricePipeline;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Company,
    TypeName,
    Ram,
    Weight,
    TouchScreen,
    Ips,
    ScreenSize,
    Resolution,
    Cpu,
    Hdd,
    Ssd,
    Gpu,
    Os,
}

impl Field {
    pub const ALL: [Field; 13] = [
        Field::Company, Field::TypeName, Field::Ram, Field::Weight,
        Field::TouchScreen, Field::Ips, Field::ScreenSize, Field::Resolution,
        Field::Cpu, Field::Hdd, Field::Ssd, Field::Gpu, Field::Os,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::Company     => "Brand",
            Field::TypeName    => "Type",
            Field::Ram         => "Ram (in GB)",
            Field::Weight      => "Weight of the laptop",
            Field::TouchScreen => "TouchScreen",
            Field::Ips         => "IPS",
            Field::ScreenSize  => "Screen Size",
            Field::Resolution  => "Screen Resolution",
            Field::Cpu         => "CPU",
            Field::Hdd         => "HDD (in GB)",
            Field::Ssd         => "SSD (in GB)",
            Field::Gpu         => "GPU",
            Field::Os          => "OS",
        }
    }

    pub fn is_numeric(self) -> bool {
        matches!(self, Field::Weight | Field::ScreenSize)
    }

    fn position(self) -> usize {
        Field::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }
}

/// What the run loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    None,
    Submit,
    Quit,
}

/// How one control should be shown.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlView {
    Select { value: String, position: usize, total: usize },
    Number { text: String },
}

pub struct FormState {
    options:     FormOptions,
    selected:    [usize; Field::ALL.len()],
    weight:      String,
    screen_size: String,
    focus:       usize,
    outcome:     Option<PredictionOutcome>,
}

impl FormState {
    pub fn new(options: FormOptions) -> Self {
        Self {
            options,
            selected:    [0; Field::ALL.len()],
            weight:      String::new(),
            screen_size: String::new(),
            focus:       0,
            outcome:     None,
        }
    }

    pub fn focused(&self) -> Field {
        Field::ALL[self.focus]
    }

    pub fn outcome(&self) -> Option<&PredictionOutcome> {
        self.outcome.as_ref()
    }

    pub fn handle_key(&mut self, key: KeyCode) -> FormAction {
        let field = self.focused();

        match key {
            KeyCode::Esc   => return FormAction::Quit,
            KeyCode::Enter => return FormAction::Submit,
            KeyCode::Down | KeyCode::Tab => {
                self.focus = (self.focus + 1) % Field::ALL.len();
            }
            KeyCode::Up | KeyCode::BackTab => {
                self.focus = (self.focus + Field::ALL.len() - 1) % Field::ALL.len();
            }
            KeyCode::Right if !field.is_numeric() => self.cycle(field, true),
            KeyCode::Left  if !field.is_numeric() => self.cycle(field, false),
            KeyCode::Char(c) if field.is_numeric() => self.type_char(field, c),
            KeyCode::Backspace if field.is_numeric() => {
                if self.number_mut(field).pop().is_some() {
                    self.outcome = None;
                }
            }
            _ => {}
        }
        FormAction::None
    }

    /// Build a LaptopSpec from the current values and run one prediction.
    pub fn submit<P: PricePipeline>(&mut self, use_case: &PredictUseCase<P>) -> &PredictionOutcome {
        let outcome = match self.spec() {
            Ok(spec) => use_case.submit(&spec),
            Err(err) => PredictionOutcome::Failed(err),
        };
        self.outcome.insert(outcome)
    }

    /// Current values as form input. Fails only when a numeric
    /// input does not hold a number.
    pub fn spec(&self) -> Result<LaptopSpec, PredictError> {
        let text = |field: Field| self.choices(field).get(self.index(field)).cloned().unwrap_or_default();
        let opts = &self.options;

        Ok(LaptopSpec {
            company:     text(Field::Company),
            type_name:   text(Field::TypeName),
            ram:         pick(&opts.ram, self.index(Field::Ram)),
            weight:      parse_number(Field::Weight, &self.weight)?,
            touchscreen: pick(&opts.touchscreen, self.index(Field::TouchScreen)),
            ips:         pick(&opts.ips, self.index(Field::Ips)),
            screen_size: parse_number(Field::ScreenSize, &self.screen_size)?,
            resolution:  text(Field::Resolution),
            cpu_brand:   text(Field::Cpu),
            hdd:         pick(&opts.hdd, self.index(Field::Hdd)),
            ssd:         pick(&opts.ssd, self.index(Field::Ssd)),
            gpu_brand:   text(Field::Gpu),
            os:          text(Field::Os),
        })
    }

    /// Display view of one control.
    pub fn view(&self, field: Field) -> ControlView {
        match field {
            Field::Weight     => ControlView::Number { text: self.weight.clone() },
            Field::ScreenSize => ControlView::Number { text: self.screen_size.clone() },
            _ => {
                let choices = self.choices(field);
                let index   = self.index(field);
                ControlView::Select {
                    value:    choices.get(index).cloned().unwrap_or_default(),
                    position: index + 1,
                    total:    choices.len(),
                }
            }
        }
    }

    fn index(&self, field: Field) -> usize {
        self.selected[field.position()]
    }

    fn choices(&self, field: Field) -> Vec<String> {
        let o = &self.options;
        match field {
            Field::Company     => o.company.clone(),
            Field::TypeName    => o.type_name.clone(),
            Field::Ram         => labels(&o.ram),
            Field::TouchScreen => labels(&o.touchscreen),
            Field::Ips         => labels(&o.ips),
            Field::Resolution  => o.resolution.clone(),
            Field::Cpu         => o.cpu_brand.clone(),
            Field::Hdd         => labels(&o.hdd),
            Field::Ssd         => labels(&o.ssd),
            Field::Gpu         => o.gpu_brand.clone(),
            Field::Os          => o.os.clone(),
            Field::Weight | Field::ScreenSize => Vec::new(),
        }
    }

    fn cycle(&mut self, field: Field, forward: bool) {
        let total = self.choices(field).len();
        if total == 0 {
            return;
        }
        let slot = &mut self.selected[field.position()];
        *slot = if forward { (*slot + 1) % total } else { (*slot + total - 1) % total };
        self.outcome = None;
    }

    fn type_char(&mut self, field: Field, c: char) {
        let buf = self.number_mut(field);
        let accepted = match c {
            '0'..='9' => true,
            '.' => !buf.contains('.'),
            '-' => buf.is_empty(),
            _   => false,
        };
        if accepted {
            buf.push(c);
            self.outcome = None;
        }
    }

    fn number_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::ScreenSize => &mut self.screen_size,
            _                 => &mut self.weight,
        }
    }
}

fn labels<T: ToString>(values: &[T]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn pick<T: Copy + Default>(values: &[T], index: usize) -> T {
    values.get(index).copied().unwrap_or_default()
}

/// An empty input reads as zero, like an untouched number box.
fn parse_number(field: Field, text: &str) -> Result<f64, PredictError> {
    if text.is_empty() {
        return Ok(0.0);
    }
    text.parse().map_err(|_| PredictError::InvalidNumber {
        field: field.label(),
        input: text.to_string(),
    })
}
