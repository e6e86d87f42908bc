use crate::CodeModel;
use crate::def::FieldId;
use crate::view::FieldDeclaration;

pub struct FieldBuilder<'m> {
    model: &'m CodeModel,
    id: FieldId,
}

impl<'m> FieldBuilder<'m> {
    pub(crate) fn new(model: &'m CodeModel, id: FieldId) -> Self {
        Self { model, id }
    }

    pub fn id(&self) -> FieldId {
        self.id
    }

    pub fn set_final(&mut self, is_final: bool) -> &mut Self {
        self.model.defs.field_mut(self.id).is_final = is_final;
        self
    }

    pub fn declaration(&self) -> FieldDeclaration<'m> {
        FieldDeclaration::new(self.model, self.id)
    }
}
