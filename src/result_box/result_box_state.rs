use crate::character::Character;
use crate::search::SelectionConsumer;

/// Last character committed from the suggestion list
#[derive(Debug, Default)]
pub struct ResultBoxState {
    selected: Option<Character>,
}

impl ResultBoxState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<&Character> {
        self.selected.as_ref()
    }
}

impl SelectionConsumer for ResultBoxState {
    fn on_select(&mut self, character: &Character) {
        log::info!("Selected {:?}", character.name);
        self.selected = Some(character.clone());
    }
}
