//! Export declarations from the `Outputs` section.

use indexmap::IndexSet;
use log::debug;

use cfn_tdv_core::{
    reference::ExportDeclaration,
    template::{Node, TemplateDocument, Visitor},
};

const OUTPUTS_KEY: &str = "Outputs";
const EXPORT_KEY: &str = "Export";
const NAME_KEY: &str = "Name";

/// Collect the export names declared anywhere under `Outputs`.
pub(super) fn extract_exports(document: &TemplateDocument) -> Vec<ExportDeclaration> {
    let Some(outputs) = document.root().get(OUTPUTS_KEY) else {
        return Vec::new();
    };

    let mut collector = ExportCollector {
        template: document.name(),
        names: IndexSet::new(),
    };
    collector.visit_node(outputs);

    collector
        .names
        .into_iter()
        .map(|name| ExportDeclaration::new(document.name(), name))
        .collect()
}

struct ExportCollector<'a> {
    template: &'a str,
    names: IndexSet<String>,
}

impl Visitor for ExportCollector<'_> {
    fn visit_entry(&mut self, key: &str, value: &Node) {
        if key == EXPORT_KEY {
            if let Some(name) = value.get(NAME_KEY) {
                match name.as_literal() {
                    Some(name) => {
                        self.names.insert(name.to_string());
                    }
                    None => debug!(template = self.template; "Skipping non-literal export name"),
                }
            }
        }
        self.visit_node(value);
    }
}

#[cfg(test)]
mod tests {
    use cfn_tdv_core::template::Scalar;

    use super::*;

    fn output(export_name: Node) -> Node {
        Node::mapping([
            ("Value", Node::tagged("Ref", Node::string("Vpc"))),
            ("Export", Node::mapping([("Name", export_name)])),
        ])
    }

    fn names(document: &TemplateDocument) -> Vec<String> {
        extract_exports(document)
            .iter()
            .map(|export| export.name().to_string())
            .collect()
    }

    #[test]
    fn test_exports_from_outputs() {
        let root = Node::mapping([(
            "Outputs",
            Node::mapping([
                ("SecurityGroup", output(Node::string("VpcStackSecurityGroup"))),
                ("PublicSubnet", output(Node::string("VpcStackPublicSubnet"))),
            ]),
        )]);
        let doc = TemplateDocument::new("vpc.yml", root);

        assert_eq!(
            names(&doc),
            vec!["VpcStackSecurityGroup", "VpcStackPublicSubnet"]
        );
        assert!(
            extract_exports(&doc)
                .iter()
                .all(|export| export.file() == "vpc.yml")
        );
    }

    #[test]
    fn test_duplicate_export_names_collapse() {
        let root = Node::mapping([(
            "Outputs",
            Node::mapping([
                ("First", output(Node::string("Shared"))),
                ("Second", output(Node::string("Shared"))),
            ]),
        )]);
        let doc = TemplateDocument::new("dup.yml", root);

        assert_eq!(names(&doc), vec!["Shared"]);
    }

    #[test]
    fn test_non_literal_export_name_is_skipped() {
        let root = Node::mapping([(
            "Outputs",
            Node::mapping([(
                "Vpc",
                output(Node::tagged("Sub", Node::string("${AWS::StackName}-Vpc"))),
            )]),
        )]);
        let doc = TemplateDocument::new("vpc.yml", root);

        assert!(names(&doc).is_empty());
    }

    #[test]
    fn test_scalar_export_names_are_literal() {
        let root = Node::mapping([(
            "Outputs",
            Node::mapping([
                ("Year", output(Node::Scalar(Scalar::Number("2024".to_string())))),
                ("Flag", output(Node::Scalar(Scalar::Bool(true)))),
            ]),
        )]);
        let doc = TemplateDocument::new("num.yml", root);

        assert_eq!(names(&doc), vec!["2024", "true"]);
    }

    #[test]
    fn test_no_outputs_section() {
        let root = Node::mapping([("Resources", Node::mapping([("Bucket", Node::default())]))]);
        let doc = TemplateDocument::new("s3.yml", root);

        assert!(extract_exports(&doc).is_empty());
    }

    #[test]
    fn test_malformed_outputs_yield_nothing() {
        let cases = [
            Node::string("not a mapping"),
            Node::Sequence(vec![Node::string("x")]),
            Node::mapping([("Vpc", Node::string("no export"))]),
            Node::mapping([("Vpc", Node::mapping([("Export", Node::string("Name"))]))]),
            Node::mapping([("Vpc", output(Node::default()))]),
        ];

        for outputs in cases {
            let doc = TemplateDocument::new("bad.yml", Node::mapping([("Outputs", outputs)]));
            assert!(extract_exports(&doc).is_empty());
        }

        let doc = TemplateDocument::new("list.yml", Node::Sequence(vec![]));
        assert!(extract_exports(&doc).is_empty());
    }

    #[test]
    fn test_exports_outside_outputs_are_ignored() {
        let root = Node::mapping([(
            "Resources",
            Node::mapping([("Thing", output(Node::string("NotAnExport")))]),
        )]);
        let doc = TemplateDocument::new("res.yml", root);

        assert!(extract_exports(&doc).is_empty());
    }
}
