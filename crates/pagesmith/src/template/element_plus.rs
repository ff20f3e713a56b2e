//! Vue 3 + Element Plus single-file components.
//!
//! Generated components read labels, lengths and options from the
//! `MetaDataField` module written next to them, so relabelling a field does
//! not require regenerating its component.

use pagesmith_core::meta::{FieldMeta, TableColumnMeta, TableMeta};

use super::{TemplateProvider, escape_attr};

/// Element Plus templates.
#[derive(Debug, Clone, Copy, Default)]
pub struct ElementPlus;

const METADATA_IMPORT: &str = "import { MetaDataField } from '~/metadata/MetaDataField'";

impl ElementPlus {
    fn column(&self, column: &TableColumnMeta) -> String {
        let id = column.id();
        let meta = format!("MetaDataField.{id}");
        let cell = if !column.editable() {
            format!("{{{{ scope.row.{id} }}}}")
        } else {
            match column {
                TableColumnMeta::Text { .. } => format!(
                    "<el-input v-model=\"scope.row.{id}\" :maxlength=\"{meta}.length\" />"
                ),
                TableColumnMeta::Number { .. } => format!(
                    "<el-input type=\"number\" v-model=\"scope.row.{id}\" :maxlength=\"{meta}.length\" />"
                ),
                TableColumnMeta::Date { .. } => {
                    format!("<el-date-picker v-model=\"scope.row.{id}\" type=\"date\" />")
                }
                TableColumnMeta::Select { .. } => format!(
                    "<el-select v-model=\"scope.row.{id}\">\n          \
                     <el-option\n            \
                     v-for=\"option in {meta}.options\"\n            \
                     :key=\"option\"\n            \
                     :label=\"option\"\n            \
                     :value=\"option\"\n          \
                     />\n        \
                     </el-select>"
                ),
            }
        };

        format!(
            "    <el-table-column :label=\"{meta}.label\" prop=\"{id}\">\n      \
             <template #default=\"scope\">\n        \
             {cell}\n      \
             </template>\n    \
             </el-table-column>\n"
        )
    }
}

impl TemplateProvider for ElementPlus {
    fn name(&self) -> &str {
        "Element Plus"
    }

    fn input_text(&self, meta: &FieldMeta) -> String {
        let id = meta.id();
        format!(
            r#"<template>
  <el-form-item :label="meta.label">
    <el-input v-model="modelValue" :maxlength="meta.length" :placeholder="meta.label" />
  </el-form-item>
</template>
<script setup lang="ts">
{METADATA_IMPORT}
import {{ ref, watch }} from 'vue'

const meta = MetaDataField.{id}
const props = defineProps<{{ modelValue: string }}>()
const emit = defineEmits<{{ (e: 'update:modelValue', value: string): void }}>()
const modelValue = ref(props.modelValue)
watch(() => props.modelValue, (val) => {{ if (val !== modelValue.value) modelValue.value = val }})
watch(modelValue, (val) => emit('update:modelValue', val))
</script>
"#
        )
    }

    fn button(&self, meta: &FieldMeta) -> String {
        let id = meta.id();
        let bindings: String = meta
            .events()
            .iter()
            .map(|event| format!(" @{}=\"{}\"", event.trigger(), event.handler()))
            .collect();

        let mut handlers = String::new();
        for event in meta.events() {
            if let Some(description) = event.description() {
                handlers.push_str(&format!("// {description}\n"));
            }
            handlers.push_str(&format!(
                "function {}() {{\n  // handles `{}` on {id}\n}}\n",
                event.handler(),
                event.trigger()
            ));
        }

        format!(
            r#"<template>
  <el-button{bindings}>{{{{ meta.label }}}}</el-button>
</template>
<script setup lang="ts">
{METADATA_IMPORT}
const meta = MetaDataField.{id}
{handlers}</script>
"#
        )
    }

    fn table(&self, meta: &TableMeta) -> String {
        let columns: String = meta.columns().iter().map(|c| self.column(c)).collect();
        let empty_row = meta
            .columns()
            .iter()
            .map(|c| format!("{}: ''", c.id()))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            r#"<template>
  <el-table :data="tableData" style="width:100%">
{columns}    <el-table-column label="Actions">
      <template #default="scope">
        <el-button @click="editRow(scope.$index)">Edit</el-button>
      </template>
    </el-table-column>
  </el-table>
</template>
<script setup lang="ts">
{METADATA_IMPORT}
import {{ ref }} from 'vue'

const tableData = ref([{{ {empty_row} }}])
function editRow(idx: number) {{
  alert('Edit row: ' + idx)
}}
</script>
"#
        )
    }

    fn row(&self, inner: &str) -> String {
        format!("<el-row>{inner}</el-row>")
    }

    fn col(&self, span: i64, inner: &str) -> String {
        format!("<el-col :span=\"{span}\">{inner}</el-col>")
    }

    fn tab(&self, inner: &str) -> String {
        format!("<el-tabs>{inner}</el-tabs>")
    }

    fn tab_pane(&self, label: &str, inner: &str) -> String {
        format!(
            "<el-tab-pane label=\"{}\">{inner}</el-tab-pane>",
            escape_attr(label)
        )
    }
}
