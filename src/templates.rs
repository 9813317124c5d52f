//! Embedded template bodies for the generated module files.

/// One output file: its name inside the module directory and its template body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateFile {
    pub filename: &'static str,
    pub source: &'static str,
}

/// The standard Terraform module layout, in emission order.
pub const TERRAFORM_MODULE: [TemplateFile; 5] = [
    TemplateFile {
        filename: "versions.tf",
        source: include_str!("../templates/versions.tf.j2"),
    },
    TemplateFile {
        filename: "main.tf",
        source: include_str!("../templates/main.tf.j2"),
    },
    TemplateFile {
        filename: "output.tf",
        source: include_str!("../templates/output.tf.j2"),
    },
    TemplateFile {
        filename: "variable.tf",
        source: include_str!("../templates/variable.tf.j2"),
    },
    TemplateFile {
        filename: "README.md",
        source: include_str!("../templates/README.md.j2"),
    },
];
