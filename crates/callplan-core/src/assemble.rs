//! Plan assembly
//!
//! Orders the selected functions, synthesizes their arguments, assigns
//! dependency links, and renders the plan as text and as pseudo-code.
//!
//! The dependency rule (each call past the second depends on the call two
//! positions back) is a placeholder policy, not parameter-flow inference;
//! it lives here so real dependency inference can replace it behind the
//! same seam.

use crate::synthesize::ParameterSynthesizer;
use crate::types::{call_id, FunctionCall};
use callplan_catalog::FunctionCatalog;

/// Fixed sentence closing every rendered plan
const PLAN_FOOTER: &str = "The functions will be executed in sequence, with each step building upon the results of the previous ones.";

/// Build dependency-annotated calls for the selected functions
///
/// `names` must arrive in the selector's deterministic order; it becomes
/// the execution order. Names missing from the catalog are dropped with a
/// warning rather than failing the plan, and numbering stays contiguous
/// over the kept entries.
///
/// Takes a plain slice so the returned future stays spawnable; a generic
/// borrowed iterator captured across the synthesis await point would leak
/// its region into the caller's future.
pub async fn assemble(
    names: &[&str],
    catalog: &FunctionCatalog,
    synthesizer: &mut dyn ParameterSynthesizer,
    query: &str,
) -> Vec<FunctionCall> {
    let mut calls = Vec::new();
    let mut order: u32 = 1;

    for &name in names {
        let Some(def) = catalog.find(name) else {
            tracing::warn!(function = name, "selector referenced unknown function, dropping");
            continue;
        };

        let parameters = synthesizer.synthesize(def, query).await;

        let param_list = parameters
            .iter()
            .map(|(key, value)| format!("{}: {}", key, value))
            .collect::<Vec<_>>()
            .join(", ");
        let description = format!("{} with parameters: {}", def.description, param_list);

        let dependencies = (order > 2).then(|| vec![call_id(order - 2)]);

        calls.push(FunctionCall {
            id: call_id(order),
            function: def.name.clone(),
            parameters,
            description,
            execution_order: order,
            dependencies,
        });
        order += 1;
    }

    calls
}

/// Render the numbered, human-readable execution plan
#[must_use]
pub fn render_plan(calls: &[FunctionCall]) -> String {
    let mut plan = String::from("Execution Plan:\n\n");

    for (index, call) in calls.iter().enumerate() {
        plan.push_str(&format!("{}. {}()\n", index + 1, call.function));
        plan.push_str(&format!("   └─ {}\n", call.description));
        if let Some(deps) = &call.dependencies {
            plan.push_str(&format!("   └─ Depends on: {}\n", deps.join(", ")));
        }
        plan.push('\n');
    }

    plan.push_str(PLAN_FOOTER);
    plan
}

/// Render a derived pseudo-code view of the plan
///
/// Purely presentational: a script-like `executeQuery` function with one
/// awaited step per call and a collected result object.
#[must_use]
pub fn render_script(calls: &[FunctionCall]) -> String {
    let mut code = String::from("// Generated execution code\n");
    code.push_str("async function executeQuery() {\n");
    code.push_str("  try {\n");

    for (index, call) in calls.iter().enumerate() {
        let params = call
            .parameters
            .iter()
            .map(|(key, value)| format!("{}: {}", key, value))
            .collect::<Vec<_>>()
            .join(", ");

        code.push_str(&format!("    // Step {}: {}\n", index + 1, call.description));
        code.push_str(&format!(
            "    const result{} = await {}({{ {} }});\n",
            index + 1,
            call.function,
            params
        ));
        if index < calls.len() - 1 {
            code.push_str(&format!(
                "    console.log('Step {} completed:', result{});\n\n",
                index + 1,
                index + 1
            ));
        }
    }

    code.push_str("    \n    return {\n");
    for (index, _) in calls.iter().enumerate() {
        let comma = if index < calls.len() - 1 { "," } else { "" };
        code.push_str(&format!("      step{}: result{}{}\n", index + 1, index + 1, comma));
    }
    code.push_str("    };\n");
    code.push_str("  } catch (error) {\n");
    code.push_str("    console.error(\"Execution failed:\", error);\n");
    code.push_str("    throw error;\n");
    code.push_str("  }\n");
    code.push_str("}\n\n");
    code.push_str("// Execute the pipeline\n");
    code.push_str("executeQuery().then(results => {\n");
    code.push_str("  console.log(\"Pipeline completed successfully:\", results);\n");
    code.push_str("}).catch(error => {\n");
    code.push_str("  console.error(\"Pipeline failed:\", error);\n");
    code.push_str("});");
    code
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synthesize::MockSynthesizer;
    use pretty_assertions::assert_eq;

    async fn calls_for(names: &[&str]) -> Vec<FunctionCall> {
        let mut synth = MockSynthesizer::seeded(9);
        assemble(names, FunctionCatalog::builtin(), &mut synth, "test query").await
    }

    #[tokio::test]
    async fn ids_and_order_are_contiguous() {
        let calls = calls_for(&["sendEmail", "createNotification", "auditLog", "generateSummary"]).await;
        assert_eq!(calls.len(), 4);
        for (i, call) in calls.iter().enumerate() {
            assert_eq!(call.execution_order, i as u32 + 1);
            assert_eq!(call.id, format!("call_{}", i + 1));
        }
    }

    #[tokio::test]
    async fn two_back_dependency_rule() {
        let calls = calls_for(&["sendEmail", "createNotification", "auditLog", "generateSummary"]).await;
        assert_eq!(calls[0].dependencies, None);
        assert_eq!(calls[1].dependencies, None);
        assert_eq!(calls[2].dependencies, Some(vec!["call_1".to_string()]));
        assert_eq!(calls[3].dependencies, Some(vec!["call_2".to_string()]));
    }

    #[tokio::test]
    async fn unknown_function_is_dropped_without_gaps() {
        let calls = calls_for(&["sendEmail", "noSuchFunction", "auditLog"]).await;
        let names: Vec<&str> = calls.iter().map(|c| c.function.as_str()).collect();
        assert_eq!(names, vec!["sendEmail", "auditLog"]);
        assert_eq!(calls[1].execution_order, 2);
    }

    #[tokio::test]
    async fn assembly_is_catalog_agnostic() {
        let catalog = callplan_test_utils::tiny_catalog();
        let mut synth = MockSynthesizer::seeded(9);
        let calls = assemble(&["alpha", "gamma", "beta"], &catalog, &mut synth, "q").await;

        let names: Vec<&str> = calls.iter().map(|c| c.function.as_str()).collect();
        assert_eq!(names, vec!["alpha", "beta"]);
        assert_eq!(calls[1].execution_order, 2);
    }

    #[tokio::test]
    async fn description_renders_parameters() {
        let calls = calls_for(&["sendEmail"]).await;
        let desc = &calls[0].description;
        assert!(desc.starts_with("Send email notifications"));
        assert!(desc.contains("with parameters:"));
        assert!(desc.contains("recipient: \"mock_recipient\""));
        assert!(desc.contains("subject: \"mock_subject\""));
    }

    #[tokio::test]
    async fn required_parameters_are_all_present() {
        let calls = calls_for(&["searchDatabase", "aggregateData"]).await;
        let catalog = FunctionCatalog::builtin();
        for call in &calls {
            let def = catalog.find(&call.function).unwrap();
            for param in def.required_params() {
                assert!(call.parameters.contains_key(&param.name), "{}", param.name);
            }
        }
    }

    #[tokio::test]
    async fn plan_rendering_shape() {
        let calls = calls_for(&["sendEmail", "createNotification", "auditLog"]).await;
        let plan = render_plan(&calls);

        assert!(plan.starts_with("Execution Plan:\n\n"));
        assert!(plan.contains("1. sendEmail()"));
        assert!(plan.contains("3. auditLog()"));
        assert!(plan.contains("   └─ Depends on: call_1"));
        assert!(plan.ends_with(PLAN_FOOTER));
        // Calls 1 and 2 carry no dependency line
        assert_eq!(plan.matches("Depends on:").count(), 1);
    }

    #[tokio::test]
    async fn empty_plan_is_footer_only() {
        let plan = render_plan(&[]);
        assert_eq!(plan, format!("Execution Plan:\n\n{}", PLAN_FOOTER));
    }

    #[tokio::test]
    async fn script_rendering_shape() {
        let calls = calls_for(&["sendEmail", "createNotification"]).await;
        let code = render_script(&calls);

        assert!(code.starts_with("// Generated execution code\n"));
        assert!(code.contains("const result1 = await sendEmail({ "));
        assert!(code.contains("const result2 = await createNotification({ "));
        // Progress log after every step but the last
        assert!(code.contains("console.log('Step 1 completed:', result1);"));
        assert!(!code.contains("console.log('Step 2 completed:'"));
        assert!(code.contains("step1: result1,\n"));
        assert!(code.contains("step2: result2\n"));
        assert!(code.ends_with("});"));
    }
}
