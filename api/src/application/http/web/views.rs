use chrono::Datelike;
use curetrackr_core::domain::{
    diagnosis::entities::{DiagnosisItem, DiagnosisResponse, Medicine, Treatment, TreatmentType},
    symptom_form::{SYMPTOM_SUGGESTIONS, SymptomForm, catalog::LANGUAGES},
};

const EMPTY_RESULTS_MESSAGE: &str =
    "No diagnosis results available. Please try again with different symptoms.";

const FOOTER_NOTICE: &str = "This tool provides information for educational purposes only and is not a substitute for professional medical advice.";

pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Badge class for a confidence percentage.
pub fn confidence_class(confidence: u8) -> &'static str {
    if confidence >= 70 {
        "diagnosis-tag-high"
    } else if confidence >= 40 {
        "diagnosis-tag-medium"
    } else {
        "diagnosis-tag-low"
    }
}

/// Card accent by rank: the top two results stand out.
pub fn accent_class(index: usize) -> &'static str {
    match index {
        0 => "accent-red",
        1 => "accent-amber",
        _ => "accent-blue",
    }
}

fn layout(root_path: &str, toasts: &[String], body: &str) -> String {
    let mut html = String::from(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>CureTrackr</title>\n</head>\n<body>\n",
    );

    html.push_str(&format!(
        "<header><div><h1>CureTrackr</h1><p>AI-Powered Medical Diagnosis</p></div>\
         <form method=\"post\" action=\"{}/sign-out\"><button type=\"submit\">Sign Out</button></form></header>\n",
        escape(root_path)
    ));

    if !toasts.is_empty() {
        html.push_str("<section class=\"toasts\">");
        for toast in toasts {
            html.push_str(&format!(
                "<div class=\"toast toast-error\" role=\"status\">{}</div>",
                escape(toast)
            ));
        }
        html.push_str("</section>\n");
    }

    html.push_str("<main>\n");
    html.push_str(body);
    html.push_str("</main>\n");

    html.push_str(&format!(
        "<footer><p>&copy; {} CureTrackr. All rights reserved.</p><p>{}</p></footer>\n",
        chrono::Utc::now().year(),
        FOOTER_NOTICE
    ));
    html.push_str("</body>\n</html>\n");
    html
}

pub fn render_form_page(form: &SymptomForm, toasts: &[String], root_path: &str) -> String {
    let disabled = if form.is_busy() { " disabled" } else { "" };
    let symptoms_state = serde_json::to_string(form.symptoms()).unwrap_or_else(|_| "[]".into());

    let mut body = String::from(
        "<section class=\"intro\"><h1>Advanced Medical Diagnosis</h1>\
         <p>Enter your symptoms and get AI-powered diagnosis and treatment recommendations</p></section>\n",
    );

    body.push_str(&format!(
        "<section class=\"symptom-form\"><h3>What symptoms are you experiencing?</h3>\
         <p>Enter your symptoms below for an AI-powered diagnosis</p>\n\
         <form method=\"post\" action=\"{}/\">\n\
         <input type=\"hidden\" name=\"symptoms\" value=\"{}\">\n",
        escape(root_path),
        escape(&symptoms_state)
    ));

    // The first submit button is the implicit one when Enter is pressed in the input.
    body.push_str(&format!(
        "<div class=\"symptom-input\"><input type=\"text\" name=\"input\" list=\"symptom-suggestions\" \
         placeholder=\"Type a symptom...\" value=\"{}\"{}>\
         <button type=\"submit\" name=\"action\" value=\"add\"{}>+</button>\
         <button type=\"submit\" name=\"action\" value=\"suggest\"{}>Suggest</button></div>\n",
        escape(form.input()),
        disabled,
        disabled,
        disabled
    ));

    body.push_str("<datalist id=\"symptom-suggestions\">");
    for suggestion in SYMPTOM_SUGGESTIONS {
        body.push_str(&format!("<option value=\"{}\">", escape(suggestion)));
    }
    body.push_str("</datalist>\n");

    let visible = form.visible_suggestions();
    if !visible.is_empty() {
        body.push_str("<ul class=\"suggestions\">");
        for suggestion in visible {
            body.push_str(&format!(
                "<li><button type=\"submit\" name=\"action\" value=\"choose:{}\">{}</button></li>",
                escape(suggestion),
                escape(suggestion)
            ));
        }
        body.push_str(
            "<li><button type=\"submit\" name=\"action\" value=\"dismiss\">Close</button></li></ul>\n",
        );
    }

    body.push_str(&format!(
        "<label>Language: <select name=\"language\"{}>",
        disabled
    ));
    for language in LANGUAGES.iter() {
        let selected = if language.code == form.language() {
            " selected"
        } else {
            ""
        };
        body.push_str(&format!(
            "<option value=\"{}\"{}>{}</option>",
            language.code, selected, language.name
        ));
    }
    body.push_str("</select></label>\n");

    body.push_str("<div class=\"symptom-tags\">");
    if form.symptoms().is_empty() {
        body.push_str("<p class=\"empty\">No symptoms added yet</p>");
    }
    for symptom in form.symptoms() {
        body.push_str(&format!(
            "<span class=\"tag\">{}<button type=\"submit\" name=\"action\" value=\"remove:{}\" \
             aria-label=\"Remove {}\"{}>&times;</button></span>",
            escape(&symptom.text),
            symptom.id,
            escape(&symptom.text),
            disabled
        ));
    }
    body.push_str("</div>\n");

    let submit_label = if form.is_busy() {
        "Analyzing..."
    } else {
        "Get Diagnosis"
    };
    body.push_str(&format!(
        "<button type=\"submit\" name=\"action\" value=\"submit\"{}>{}</button>\n</form></section>\n",
        if form.can_submit() { "" } else { " disabled" },
        submit_label
    ));

    layout(root_path, toasts, &body)
}

fn render_treatment(treatment: &Treatment) -> String {
    let description = if treatment.description.is_empty() {
        "No description available".to_string()
    } else {
        escape(&treatment.description)
    };
    let type_class = match treatment.treatment_type {
        TreatmentType::Traditional => "type-traditional",
        TreatmentType::Alternative => "type-alternative",
    };
    format!(
        "<div class=\"treatment\"><span class=\"name\">{}</span>\
         <span class=\"{}\">{}</span><p>{}</p></div>",
        escape(&treatment.name),
        type_class,
        treatment.treatment_type.as_str(),
        description
    )
}

fn render_medicine(medicine: &Medicine) -> String {
    let dosage = if medicine.dosage.is_empty() {
        "Dosage not specified".to_string()
    } else {
        escape(&medicine.dosage)
    };

    let mut html = format!(
        "<div class=\"medicine\"><span class=\"name\">{}</span><span class=\"dosage\">{}</span>\
         <div class=\"side-effects\"><span>Side Effects:</span>",
        escape(&medicine.name),
        dosage
    );
    if medicine.side_effects.is_empty() {
        html.push_str("<span>No side effects listed</span>");
    }
    for effect in &medicine.side_effects {
        html.push_str(&format!("<span class=\"pill\">{}</span>", escape(effect)));
    }
    html.push_str("</div>");

    if let Some(alternatives) = &medicine.alternatives
        && !alternatives.is_empty()
    {
        html.push_str("<div class=\"alternatives\"><span>Alternatives:</span>");
        for alternative in alternatives {
            html.push_str(&format!("<span class=\"pill\">&rarr; {}</span>", escape(alternative)));
        }
        html.push_str("</div>");
    }

    html.push_str("</div>");
    html
}

fn render_item(item: &DiagnosisItem, index: usize) -> String {
    let disease = if item.disease.is_empty() {
        "Unknown Disease"
    } else {
        item.disease.as_str()
    };
    let description = if item.description.is_empty() {
        "No description available"
    } else {
        item.description.as_str()
    };

    let mut html = format!(
        "<article class=\"diagnosis-card {}\"><header><h3>{}</h3>\
         <span class=\"diagnosis-tag {}\">{}% match</span></header><p>{}</p>\n",
        accent_class(index),
        escape(disease),
        confidence_class(item.confidence),
        item.confidence,
        escape(description)
    );

    html.push_str("<details><summary>Treatments</summary>");
    if item.treatments.is_empty() {
        html.push_str("<p class=\"empty\">No specific treatments available</p>");
    }
    for treatment in &item.treatments {
        html.push_str(&render_treatment(treatment));
    }
    html.push_str("</details>\n");

    html.push_str("<details><summary>Medicines</summary>");
    if item.medicines.is_empty() {
        html.push_str("<p class=\"empty\">No specific medicines recommended</p>");
    }
    for medicine in &item.medicines {
        html.push_str(&render_medicine(medicine));
    }
    html.push_str("</details>\n");

    html.push_str("<details><summary>Prevention</summary>");
    if item.preventive_measures.is_empty() {
        html.push_str("<p class=\"empty\">No specific preventive measures available</p>");
    } else {
        html.push_str("<ul>");
        for measure in &item.preventive_measures {
            html.push_str(&format!("<li>{}</li>", escape(measure)));
        }
        html.push_str("</ul>");
    }
    html.push_str("</details>\n");

    let subject = if item.disease.is_empty() {
        "this condition"
    } else {
        item.disease.as_str()
    };
    html.push_str(&format!(
        "<details><summary>More Information</summary><p>For more detailed information about {}, \
         please consult with a healthcare professional. This diagnosis is provided as a general \
         guideline and should not replace professional medical advice.</p></details>\n",
        escape(subject)
    ));

    html.push_str("</article>\n");
    html
}

/// Results page for a stored diagnosis.
pub fn render_results_page(
    response: &DiagnosisResponse,
    toasts: &[String],
    root_path: &str,
) -> String {
    let mut body = format!(
        "<section class=\"results\"><div class=\"results-header\">\
         <form method=\"post\" action=\"{}/\"><button type=\"submit\" name=\"action\" value=\"reset\">\
         &larr; New diagnosis</button></form>\
         <div><h2>Diagnosis Results</h2><p>Based on your symptoms</p></div></div>\n\
         <div class=\"alert alert-warning\" role=\"alert\">{}</div>\n",
        escape(root_path),
        escape(&response.disclaimer)
    );

    if response.diagnosis.is_empty() {
        body.push_str(&format!("<p class=\"empty\">{}</p>\n", EMPTY_RESULTS_MESSAGE));
    }
    for (index, item) in response.diagnosis.iter().enumerate() {
        body.push_str(&render_item(item, index));
    }
    body.push_str("</section>\n");

    layout(root_path, toasts, &body)
}
