use super::DialectSyntax;
use crate::menu::{self, MenuItem};
use crate::snippets::Snippet;

pub struct PowerShell;

const SNIPPETS: &[Snippet] = &[
    Snippet {
        id: "header_comment",
        name: "Header Comment Block",
        code: "<#\n.SYNOPSIS\n   \n.DESCRIPTION\n   \n.NOTES\n   Author: \n   Date: \n#>\n\n",
    },
    Snippet {
        id: "param_block",
        name: "Parameter Block",
        code: "param (\n    [Parameter(Mandatory=$true)]\n    [string]$InputParameter\n)\n\nWrite-Host \"Input was: $InputParameter\"\n",
    },
    Snippet {
        id: "simple_func",
        name: "Simple Function",
        code: "function My-Function {\n    param()\n    Write-Host \"Hello from function!\"\n}\n\n# Call the function\n# My-Function\n",
    },
    Snippet {
        id: "read_input",
        name: "Read User Input",
        code: "$userInput = Read-Host -Prompt \"Enter value\"\nWrite-Host \"You entered: $userInput\"\n",
    },
];

impl DialectSyntax for PowerShell {
    fn name(&self) -> &'static str {
        "PowerShell"
    }

    fn extension(&self) -> &'static str {
        "ps1"
    }

    fn snippets(&self) -> &'static [Snippet] {
        SNIPPETS
    }

    // The loop condition doubles as the exit branch, so there is no separate
    // dispatch routine like the Bash `read_option`.
    fn render_menu(&self, items: &[MenuItem]) -> String {
        let mut code = String::from("function Show-Menu {\n");
        code.push_str(&format!("    Write-Host \"{}\"\n", menu::BANNER_RULE));
        code.push_str(&format!("    Write-Host \"{}\"\n", menu::BANNER_TITLE));
        code.push_str(&format!("    Write-Host \"{}\"\n", menu::BANNER_RULE));
        for (number, item) in menu::numbered(items) {
            code.push_str(&format!("    Write-Host \"{}. {}\"\n", number, item.title));
        }
        code.push_str(&format!("    Write-Host \"{}\"\n}}\n\n", menu::EXIT_LABEL));

        code.push_str("do {\n    Show-Menu\n");
        code.push_str(&format!(
            "    $choice = Read-Host -Prompt \"Enter choice [ 1 - {} ]\"\n",
            items.len()
        ));
        code.push_str("    switch ($choice) {\n");
        for (number, item) in menu::numbered(items) {
            code.push_str(&format!("        \"{}\" {{ {} }}\n", number, item.action));
        }
        code.push_str(&format!(
            "        \"{}\" {{ Write-Host \"{}\"; exit }}\n",
            menu::EXIT_CHOICE,
            menu::EXIT_MESSAGE
        ));
        code.push_str(&format!(
            "        default {{ Write-Host \"{}\" -ForegroundColor Red; Start-Sleep -Seconds {} }}\n",
            menu::INVALID_OPTION_MESSAGE,
            menu::INVALID_OPTION_PAUSE_SECS
        ));
        code.push_str("    }\n");
        code.push_str(&format!(
            "}} while ($choice -ne \"{}\")\n",
            menu::EXIT_CHOICE
        ));
        code
    }
}
