//! Built-in function library
//!
//! The fixed set of invocable operations the planner selects from. Entry
//! order matters: `by_category()` and plan numbering both derive from it.

use crate::definition::ParameterType::{Any, Array, Boolean, Number, Object, String as Str};
use crate::definition::{FunctionDefinition, FunctionParameter, ParameterType, ReturnSpec};

fn req(name: &str, ty: ParameterType, desc: &str) -> FunctionParameter {
    FunctionParameter::required(name, ty, desc)
}

fn opt(name: &str, ty: ParameterType, desc: &str) -> FunctionParameter {
    FunctionParameter::optional(name, ty, desc)
}

fn ret(ty: ParameterType, desc: &str) -> ReturnSpec {
    ReturnSpec::new(ty, desc)
}

/// All built-in definitions, in catalog order
#[must_use]
pub fn definitions() -> Vec<FunctionDefinition> {
    vec![
        // Data Retrieval
        FunctionDefinition::new(
            "retrieveInvoices",
            "Retrieve invoices from the database based on date range or filters",
            "Data Retrieval",
            ret(Array, "Array of invoice objects"),
        )
        .with_param(req("startDate", Str, "Start date for invoice retrieval"))
        .with_param(req("endDate", Str, "End date for invoice retrieval"))
        .with_param(opt("status", Str, "Invoice status filter"))
        .with_param(opt("customerId", Str, "Customer ID filter"))
        .with_example("retrieveInvoices(\"2024-03-01\", \"2024-03-31\", \"paid\")"),
        FunctionDefinition::new(
            "getCustomerData",
            "Fetch customer information and transaction history",
            "Data Retrieval",
            ret(Object, "Customer data object with optional history"),
        )
        .with_param(req("customerId", Str, "Unique customer identifier"))
        .with_param(opt("includeHistory", Boolean, "Include transaction history")),
        FunctionDefinition::new(
            "fetchProductCatalog",
            "Retrieve product catalog with pricing and availability",
            "Data Retrieval",
            ret(Array, "Array of product objects"),
        )
        .with_param(opt("category", Str, "Product category filter"))
        .with_param(opt("inStock", Boolean, "Filter by stock availability")),
        FunctionDefinition::new(
            "getOrderHistory",
            "Retrieve order history with filtering options",
            "Data Retrieval",
            ret(Array, "Array of order objects"),
        )
        .with_param(opt("customerId", Str, "Customer ID"))
        .with_param(opt("dateRange", Object, "Date range object"))
        .with_param(opt("status", Str, "Order status")),
        FunctionDefinition::new(
            "searchDatabase",
            "Perform complex database searches with multiple criteria",
            "Data Retrieval",
            ret(Array, "Search results array"),
        )
        .with_param(req("table", Str, "Database table name"))
        .with_param(req("criteria", Object, "Search criteria object"))
        .with_param(opt("limit", Number, "Maximum results to return")),
        // Data Processing
        FunctionDefinition::new(
            "calculateTotal",
            "Calculate totals and perform mathematical operations on datasets",
            "Data Processing",
            ret(Number, "Calculated result"),
        )
        .with_param(req("data", Array, "Array of numeric data or objects"))
        .with_param(opt("field", Str, "Field to calculate from objects"))
        .with_param(opt("operation", Str, "Operation type (sum, avg, max, min)")),
        FunctionDefinition::new(
            "generateSummary",
            "Generate summary statistics and insights from data",
            "Data Processing",
            ret(Object, "Summary object with statistics"),
        )
        .with_param(req("data", Array, "Data to summarize"))
        .with_param(opt("metrics", Array, "Metrics to include in summary")),
        FunctionDefinition::new(
            "filterData",
            "Filter datasets based on specified criteria",
            "Data Processing",
            ret(Array, "Filtered data array"),
        )
        .with_param(req("data", Array, "Data to filter"))
        .with_param(req("filters", Object, "Filter criteria")),
        FunctionDefinition::new(
            "sortData",
            "Sort data by specified fields and order",
            "Data Processing",
            ret(Array, "Sorted data array"),
        )
        .with_param(req("data", Array, "Data to sort"))
        .with_param(req("field", Str, "Field to sort by"))
        .with_param(opt("order", Str, "Sort order (asc/desc)")),
        FunctionDefinition::new(
            "aggregateData",
            "Perform data aggregation operations like grouping and counting",
            "Data Processing",
            ret(Object, "Aggregated results"),
        )
        .with_param(req("data", Array, "Data to aggregate"))
        .with_param(req("groupBy", Str, "Field to group by"))
        .with_param(req("aggregation", Str, "Aggregation function")),
        // Communication
        FunctionDefinition::new(
            "sendEmail",
            "Send email notifications with attachments and formatting",
            "Communication",
            ret(Boolean, "Success status of email delivery"),
        )
        .with_param(req("recipient", Str, "Email recipient address"))
        .with_param(req("subject", Str, "Email subject line"))
        .with_param(req("body", Str, "Email body content"))
        .with_param(opt("attachments", Array, "File attachments")),
        FunctionDefinition::new(
            "sendSMS",
            "Send SMS messages to mobile numbers",
            "Communication",
            ret(Object, "SMS delivery status and ID"),
        )
        .with_param(req("phoneNumber", Str, "Recipient phone number"))
        .with_param(req("message", Str, "SMS message content")),
        FunctionDefinition::new(
            "createNotification",
            "Create system notifications for users",
            "Communication",
            ret(Str, "Notification ID"),
        )
        .with_param(req("userId", Str, "Target user ID"))
        .with_param(req("message", Str, "Notification message"))
        .with_param(opt("priority", Str, "Notification priority level")),
        FunctionDefinition::new(
            "scheduleReminder",
            "Schedule reminders for future dates",
            "Communication",
            ret(Str, "Reminder ID"),
        )
        .with_param(req("userId", Str, "User to remind"))
        .with_param(req("message", Str, "Reminder message"))
        .with_param(req("scheduledTime", Str, "When to send reminder")),
        // File Operations
        FunctionDefinition::new(
            "generateReport",
            "Generate formatted reports in various formats (PDF, Excel, HTML)",
            "File Operations",
            ret(Str, "Generated report file path"),
        )
        .with_param(req("data", Object, "Report data"))
        .with_param(req("template", Str, "Report template name"))
        .with_param(opt("format", Str, "Output format (pdf, excel, html)")),
        FunctionDefinition::new(
            "exportData",
            "Export data to various file formats",
            "File Operations",
            ret(Str, "Exported file path"),
        )
        .with_param(req("data", Array, "Data to export"))
        .with_param(req("format", Str, "Export format (csv, json, xml)"))
        .with_param(opt("filename", Str, "Output filename")),
        FunctionDefinition::new(
            "uploadFile",
            "Upload files to cloud storage or file system",
            "File Operations",
            ret(Str, "Uploaded file URL or path"),
        )
        .with_param(req("file", Object, "File object to upload"))
        .with_param(req("destination", Str, "Upload destination path")),
        FunctionDefinition::new(
            "processDocument",
            "Process and extract data from documents",
            "File Operations",
            ret(Object, "Extracted document data"),
        )
        .with_param(req("filePath", Str, "Path to document file"))
        .with_param(req("extractionType", Str, "Type of data to extract")),
        // Authentication & Security
        FunctionDefinition::new(
            "authenticateUser",
            "Authenticate user credentials and generate session tokens",
            "Authentication",
            ret(Object, "Authentication result with token"),
        )
        .with_param(req("username", Str, "User login name"))
        .with_param(req("password", Str, "User password"))
        .with_param(opt("mfaCode", Str, "Multi-factor authentication code")),
        FunctionDefinition::new(
            "validatePermissions",
            "Check user permissions for specific actions",
            "Authentication",
            ret(Boolean, "Permission validation result"),
        )
        .with_param(req("userId", Str, "User ID to check"))
        .with_param(req("resource", Str, "Resource being accessed"))
        .with_param(req("action", Str, "Action being performed")),
        FunctionDefinition::new(
            "encryptData",
            "Encrypt sensitive data using various algorithms",
            "Security",
            ret(Str, "Encrypted data string"),
        )
        .with_param(req("data", Str, "Data to encrypt"))
        .with_param(opt("algorithm", Str, "Encryption algorithm")),
        FunctionDefinition::new(
            "auditLog",
            "Create audit log entries for security tracking",
            "Security",
            ret(Str, "Audit log entry ID"),
        )
        .with_param(req("userId", Str, "User performing action"))
        .with_param(req("action", Str, "Action performed"))
        .with_param(req("resource", Str, "Resource affected"))
        .with_param(opt("metadata", Object, "Additional audit data")),
        // Integration
        FunctionDefinition::new(
            "callWebhook",
            "Make HTTP requests to external webhook endpoints",
            "Integration",
            ret(Object, "Webhook response data"),
        )
        .with_param(req("url", Str, "Webhook URL"))
        .with_param(opt("method", Str, "HTTP method"))
        .with_param(opt("payload", Object, "Request payload"))
        .with_param(opt("headers", Object, "Request headers")),
        FunctionDefinition::new(
            "syncDatabase",
            "Synchronize data between different database systems",
            "Integration",
            ret(Object, "Synchronization result summary"),
        )
        .with_param(req("sourceDb", Str, "Source database connection"))
        .with_param(req("targetDb", Str, "Target database connection"))
        .with_param(req("tables", Array, "Tables to synchronize")),
        FunctionDefinition::new(
            "connectAPI",
            "Establish connections to third-party APIs",
            "Integration",
            ret(Object, "API connection object"),
        )
        .with_param(req("apiEndpoint", Str, "API endpoint URL"))
        .with_param(req("credentials", Object, "API credentials"))
        .with_param(opt("config", Object, "Connection configuration")),
        // Analytics
        FunctionDefinition::new(
            "generateMetrics",
            "Calculate business metrics and KPIs from data",
            "Analytics",
            ret(Object, "Calculated metrics object"),
        )
        .with_param(req("data", Array, "Source data for metrics"))
        .with_param(req("metricTypes", Array, "Types of metrics to calculate"))
        .with_param(opt("timeRange", Object, "Time range for analysis")),
        FunctionDefinition::new(
            "createChart",
            "Generate visualizations and charts from data",
            "Analytics",
            ret(Object, "Chart configuration object"),
        )
        .with_param(req("data", Array, "Chart data"))
        .with_param(req("chartType", Str, "Type of chart to create"))
        .with_param(opt("options", Object, "Chart styling options")),
        FunctionDefinition::new(
            "performAnalysis",
            "Perform statistical analysis on datasets",
            "Analytics",
            ret(Object, "Analysis results"),
        )
        .with_param(req("data", Array, "Data to analyze"))
        .with_param(req("analysisType", Str, "Type of analysis to perform"))
        .with_param(opt("parameters", Object, "Analysis parameters")),
        FunctionDefinition::new(
            "trackEvent",
            "Track user events and behaviors for analytics",
            "Analytics",
            ret(Boolean, "Event tracking success status"),
        )
        .with_param(req("eventName", Str, "Name of the event"))
        .with_param(opt("userId", Str, "User ID"))
        .with_param(opt("properties", Object, "Event properties")),
        // Workflow
        FunctionDefinition::new(
            "createWorkflow",
            "Create automated workflows with multiple steps",
            "Workflow",
            ret(Str, "Created workflow ID"),
        )
        .with_param(req("name", Str, "Workflow name"))
        .with_param(req("steps", Array, "Workflow steps configuration"))
        .with_param(req("triggers", Array, "Workflow triggers")),
        FunctionDefinition::new(
            "executeWorkflow",
            "Execute a predefined workflow",
            "Workflow",
            ret(Object, "Workflow execution result"),
        )
        .with_param(req("workflowId", Str, "Workflow ID to execute"))
        .with_param(opt("input", Object, "Input data for workflow")),
        FunctionDefinition::new(
            "scheduleTask",
            "Schedule tasks for future execution",
            "Workflow",
            ret(Str, "Scheduled task ID"),
        )
        .with_param(req("task", Object, "Task configuration"))
        .with_param(req("schedule", Str, "Cron schedule expression")),
        // Validation
        FunctionDefinition::new(
            "validateInput",
            "Validate input data against predefined schemas",
            "Validation",
            ret(Object, "Validation result with errors if any"),
        )
        .with_param(req("data", Object, "Data to validate"))
        .with_param(req("schema", Object, "Validation schema")),
        FunctionDefinition::new(
            "sanitizeData",
            "Clean and sanitize data for security",
            "Validation",
            ret(Any, "Sanitized data"),
        )
        .with_param(req("data", Any, "Data to sanitize"))
        .with_param(opt("rules", Array, "Sanitization rules")),
        FunctionDefinition::new(
            "checkConstraints",
            "Verify data meets business constraints",
            "Validation",
            ret(Object, "Constraint validation results"),
        )
        .with_param(req("data", Object, "Data to check"))
        .with_param(req("constraints", Array, "Business constraints")),
        // Utility
        FunctionDefinition::new(
            "formatDate",
            "Format dates according to specified patterns",
            "Utility",
            ret(Str, "Formatted date string"),
        )
        .with_param(req("date", Str, "Date to format"))
        .with_param(req("format", Str, "Date format pattern"))
        .with_param(opt("timezone", Str, "Target timezone")),
        FunctionDefinition::new(
            "generateId",
            "Generate unique identifiers",
            "Utility",
            ret(Str, "Generated unique ID"),
        )
        .with_param(opt("type", Str, "ID type (uuid, sequential, custom)"))
        .with_param(opt("prefix", Str, "ID prefix")),
        FunctionDefinition::new(
            "convertUnits",
            "Convert between different units of measurement",
            "Utility",
            ret(Number, "Converted value"),
        )
        .with_param(req("value", Number, "Value to convert"))
        .with_param(req("fromUnit", Str, "Source unit"))
        .with_param(req("toUnit", Str, "Target unit")),
        FunctionDefinition::new(
            "parseJSON",
            "Parse and validate JSON strings",
            "Utility",
            ret(Object, "Parsed JSON object"),
        )
        .with_param(req("jsonString", Str, "JSON string to parse"))
        .with_param(opt("schema", Object, "Optional validation schema")),
        FunctionDefinition::new(
            "compressData",
            "Compress data for storage or transmission",
            "Utility",
            ret(Str, "Compressed data"),
        )
        .with_param(req("data", Any, "Data to compress"))
        .with_param(opt("algorithm", Str, "Compression algorithm")),
        // Machine Learning
        FunctionDefinition::new(
            "trainModel",
            "Train machine learning models with provided data",
            "Machine Learning",
            ret(Object, "Trained model object"),
        )
        .with_param(req("trainingData", Array, "Training dataset"))
        .with_param(req("modelType", Str, "Type of ML model"))
        .with_param(opt("parameters", Object, "Training parameters")),
        FunctionDefinition::new(
            "predictValues",
            "Make predictions using trained models",
            "Machine Learning",
            ret(Array, "Predicted values"),
        )
        .with_param(req("model", Object, "Trained model object"))
        .with_param(req("inputData", Array, "Input data for prediction")),
        FunctionDefinition::new(
            "classifyText",
            "Classify text using natural language processing",
            "Machine Learning",
            ret(Object, "Classification result with confidence"),
        )
        .with_param(req("text", Str, "Text to classify"))
        .with_param(req("categories", Array, "Available categories")),
        FunctionDefinition::new(
            "extractEntities",
            "Extract named entities from text",
            "Machine Learning",
            ret(Array, "Extracted entities with positions"),
        )
        .with_param(req("text", Str, "Text to analyze"))
        .with_param(opt("entityTypes", Array, "Types of entities to extract")),
        // Monitoring
        FunctionDefinition::new(
            "logActivity",
            "Log system activities and events",
            "Monitoring",
            ret(Str, "Log entry ID"),
        )
        .with_param(req("level", Str, "Log level (info, warn, error)"))
        .with_param(req("message", Str, "Log message"))
        .with_param(opt("metadata", Object, "Additional log data")),
        FunctionDefinition::new(
            "monitorPerformance",
            "Monitor system performance metrics",
            "Monitoring",
            ret(Object, "Performance metrics data"),
        )
        .with_param(req("component", Str, "Component to monitor"))
        .with_param(req("metrics", Array, "Metrics to track")),
        FunctionDefinition::new(
            "createAlert",
            "Create system alerts based on conditions",
            "Monitoring",
            ret(Str, "Alert configuration ID"),
        )
        .with_param(req("condition", Object, "Alert trigger condition"))
        .with_param(req("recipients", Array, "Alert recipients"))
        .with_param(opt("severity", Str, "Alert severity level")),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn library_size_and_order() {
        let defs = definitions();
        assert_eq!(defs.len(), 47);
        assert_eq!(defs[0].name, "retrieveInvoices");
        assert_eq!(defs.last().unwrap().name, "createAlert");
    }

    #[test]
    fn names_are_unique() {
        let defs = definitions();
        let mut names: Vec<&str> = defs.iter().map(|d| d.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), defs.len());
    }

    #[test]
    fn only_first_entry_has_example() {
        let defs = definitions();
        assert!(defs[0].example.as_deref().unwrap().starts_with("retrieveInvoices("));
        assert!(defs[1..].iter().all(|d| d.example.is_none()));
    }

    #[test]
    fn every_entry_has_return_description() {
        for def in definitions() {
            assert!(!def.returns.description.is_empty(), "{}", def.name);
        }
    }
}
