use std::path::{Path, PathBuf};

use cavemeta_core::{FileRules, GeneratedFile, generated_file_name, include_path};
use cavemeta_scan::{FieldRecord, ScanResult};

use super::{Namespace, RegistrationTable};
use crate::{
    EmitSettings, GenerateError, Result,
    builder::{CodeBuilder, Renderable},
};

/// The `<stem>.meta.cpp` translation unit generated for one header.
#[derive(Debug, Clone)]
pub struct MetaFile<'a> {
    settings: &'a EmitSettings,
    input: &'a str,
    file_name: String,
    class_name: &'a str,
    fields: &'a [FieldRecord],
}

impl<'a> MetaFile<'a> {
    /// Prepare the meta file for `input` (a header path relative to the engine root).
    ///
    /// Fails with [`GenerateError::UnresolvedClass`] when the scan found no
    /// class marker.
    pub fn new(settings: &'a EmitSettings, input: &'a str, scan: &'a ScanResult) -> Result<Self> {
        let class_name = scan.class_name().ok_or_else(|| {
            Box::new(GenerateError::UnresolvedClass {
                input: input.to_string(),
                class_marker: settings.class_marker.clone(),
            })
        })?;
        let file_name = generated_file_name(input, &settings.suffix).ok_or_else(|| {
            Box::new(GenerateError::InvalidInput {
                input: input.to_string(),
            })
        })?;

        Ok(Self {
            settings,
            input,
            file_name,
            class_name,
            fields: &scan.fields,
        })
    }

    /// Generated file name, e.g. `transform_component.meta.cpp`.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn class_name(&self) -> &str {
        self.class_name
    }

    fn header_name(&self) -> &str {
        let normalized = self.input.rsplit(['/', '\\']).next();
        normalized.unwrap_or(self.input)
    }

    fn field_comment(field: &FieldRecord) -> String {
        let declaration = if field.declared_type.is_empty() {
            field.field_name.clone()
        } else {
            format!("{} {}", field.declared_type, field.field_name)
        };
        format!("{} ({})", declaration, field.metadata)
    }
}

impl GeneratedFile for MetaFile<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.settings.output_dir).join(&self.file_name)
    }

    fn rules(&self) -> FileRules {
        FileRules::default()
    }

    fn render(&self) -> String {
        let settings = self.settings;
        let table = RegistrationTable::new(self.class_name, self.fields, &settings.member_prefix);
        let namespace = Namespace::new(&settings.namespace, &table);

        let mut builder = CodeBuilder::cpp()
            .comment(&format!("Auto-generated metadata for {}", self.header_name()))
            .comment(&format!("Source: {}", self.input.replace('\\', "/")))
            .comment("Do not edit this file by hand.")
            .blank()
            .when(!self.fields.is_empty(), |b| {
                b.each(self.fields, |b, field| b.comment(&Self::field_comment(field)))
                    .blank()
            })
            .line(&format!("#include \"{}\"", settings.runtime_include))
            .line(&format!(
                "#include \"{}\"",
                include_path(&settings.include_prefix, self.input)
            ))
            .blank();
        builder.emit(&namespace);
        builder.build()
    }
}
