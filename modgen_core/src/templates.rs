use minijinja::Environment;
use serde::Serialize;

use crate::ModgenError;
use crate::ModgenResult;

pub(crate) const LICENSE_HEADER: &str = "/**
 * @license {{ meta.title }} v{{ meta.version }} {{ date }}
 * {{ meta.homepage }}
 *
 * Copyright (c) {{ year }}, {{ meta.author.name }} ({{ meta.author.url }})
 * Licensed under the {{ meta.license }} license.
 **/

";

pub(crate) const ORIGINAL: &str = "{{ header }}{{ source }}\n";

pub(crate) const COMMONJS: &str = "'use strict';
{% for ext in externs %}
const {{ ext.name }} = require('{{ ext.source }}');
{% endfor %}

{{ source }}

Object.defineProperty({{ name }}, \"__esModule\", { 'value': true });
{{ name }}['default'] = {{ name }};
{{ name }}['{{ name }}'] = {{ name }};
module['exports'] = {{ name }};
";

pub(crate) const ESM: &str = "'use strict';
{% for ext in externs %}
import {{ ext.name }} from '{{ ext.source }}';
{% endfor %}

{{ source }}
export {
  {{ name }} as default, {{ name }}
};
";

pub(crate) const GLOBAL_FEATURE_DETECT: &str = "{{ header }}
(function(window) {
{{ source }}

  if (typeof define === 'function' && define['amd']) {
    define([], function() {
      return {{ name }};
    });
  } else if (typeof exports === 'object') {
    Object.defineProperty({{ name }}, \"__esModule\", { 'value': true });
    {{ name }}['default'] = {{ name }};
    {{ name }}['{{ name }}'] = {{ name }};
    module['exports'] = {{ name }};
  } else {
    window['{{ name }}'] = {{ name }};
  }

})(this);
";

pub(crate) const GLOBAL_PLAIN: &str = "{{ header }}
(function(window) {
{{ source }}

  window['{{ name }}'] = {{ name }};

})(this);
";

pub(crate) const EXTERNS_LISTING: &str = "var module;
{% for ext in externs %}
var {{ ext.name }};
{% endfor %}
";

pub(crate) const MIT_LICENSE: &str = "MIT License

Copyright (c) {{ year }} {{ meta.author.name }}

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the \"Software\"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED \"AS IS\", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
";

pub(crate) const README_SECTION: &str = "## Copyright and Licensing

Copyright (c) {{ year }}, [{{ meta.author.name }}]({{ meta.author.url }})
Licensed under the {{ meta.license }} license.
";

/// Render one of the built-in templates. Template names carry no file
/// extension so minijinja never auto-escapes the JavaScript being embedded.
pub(crate) fn render<S: Serialize>(name: &str, template: &str, ctx: S) -> ModgenResult<String> {
	let mut env = Environment::new();
	env.set_keep_trailing_newline(true);
	env.set_trim_blocks(true);
	env.set_lstrip_blocks(true);
	env.set_undefined_behavior(minijinja::UndefinedBehavior::Strict);

	env.render_named_str(name, template, ctx)
		.map_err(|e| ModgenError::TemplateRender(e.to_string()))
}
