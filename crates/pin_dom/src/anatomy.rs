/// `data-part` values a rendering layer puts on the control's elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Part {
    Container,
    Label,
    HiddenInput,
    InputGroup,
    Input,
}

impl Part {
    pub fn as_str(self) -> &'static str {
        match self {
            Part::Container => "container",
            Part::Label => "label",
            Part::HiddenInput => "hidden-input",
            Part::InputGroup => "input-group",
            Part::Input => "input",
        }
    }
}

pub const DATA_PART: &str = "data-part";
