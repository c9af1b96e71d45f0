use std::collections::BTreeMap;

/// A file picked in the image selector, held locally until submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhotoFile {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl PhotoFile {
    pub fn new(
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes: bytes.into(),
        }
    }
}

/// The text inputs of the registration page, named as the markup names
/// them. The form component itself works on a dynamic field map; this
/// struct is a typed convenience for callers that know the page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PetCreation {
    pub nome: String,
    pub raca: String,
    pub peso: String,
    pub idade: String,
    pub sexo: String,
    pub obs: String,
}

impl PetCreation {
    pub fn into_fields(self) -> BTreeMap<String, String> {
        BTreeMap::from([
            ("nome".to_owned(), self.nome),
            ("raca".to_owned(), self.raca),
            ("peso".to_owned(), self.peso),
            ("idade".to_owned(), self.idade),
            ("sexo".to_owned(), self.sexo),
            ("obs".to_owned(), self.obs),
        ])
    }
}
