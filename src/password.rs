use rand::Rng;
use serde::{ Deserialize, Serialize };

use crate::charset::{ CharClass, ClassSet };
use crate::errors::FormError;
use crate::generators::{ Sampling, generate_with };
use crate::settings::Settings;
use crate::validate::validate_length;

/// Editable class toggles, the state a front-end flips before submitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Toggles {
    pub lower: bool,
    pub upper: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl Default for Toggles {
    fn default() -> Self {
        Self {
            lower: true,
            upper: false,
            digits: false,
            symbols: false,
        }
    }
}

impl Toggles {
    pub fn reset_default() -> Self {
        Self {
            symbols: true,
            ..Self::default()
        }
    }

    pub fn none() -> Self {
        Self {
            lower: false,
            upper: false,
            digits: false,
            symbols: false,
        }
    }

    pub fn reset(settings: &Settings) -> Self {
        settings.reset
    }

    pub fn classes(&self) -> ClassSet {
        let mut set = ClassSet::empty();
        if self.lower {
            set.insert(CharClass::Lower);
        }
        if self.upper {
            set.insert(CharClass::Upper);
        }
        if self.digits {
            set.insert(CharClass::Digit);
        }
        if self.symbols {
            set.insert(CharClass::Symbol);
        }
        set
    }
}

/// A validated length and class selection for one generation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    length: usize,
    classes: ClassSet,
}

impl GenerationRequest {
    pub fn new(raw_length: &str, toggles: &Toggles) -> Result<Self, FormError> {
        let length = validate_length(raw_length)?;
        let classes = toggles.classes();

        if classes.is_empty() {
            tracing::warn!("no character class selected");
            return Err(FormError::NoClassesSelected);
        }

        Ok(Self { length, classes })
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn classes(&self) -> &ClassSet {
        &self.classes
    }

    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R, sampling: Sampling) -> String {
        generate_with(rng, self.length, &self.classes, sampling)
    }
}

/// Validates the form input, then generates one password.
pub fn submit(raw_length: &str, toggles: &Toggles, sampling: Sampling) -> Result<String, FormError> {
    let request = GenerationRequest::new(raw_length, toggles)?;
    tracing::debug!(?request, "submitted");

    let mut rng = rand::rng();
    Ok(request.generate(&mut rng, sampling))
}
