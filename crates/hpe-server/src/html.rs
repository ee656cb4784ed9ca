//! Community page template.
//!
//! `{{lang}}`, `{{title}}` and `{{strings}}` are substituted by
//! [`crate::routes::page::render_page`]. The script talks to the JSON API and
//! hands the graph to vis-network.

pub const PAGE_HTML: &str = r##"<!DOCTYPE html>
<html lang="{{lang}}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width,initial-scale=1">
<title>{{title}}</title>
<script src="https://unpkg.com/vis-network@9.1.9/standalone/umd/vis-network.min.js"></script>
<style>
*{box-sizing:border-box}
body{font-family:-apple-system,BlinkMacSystemFont,'Segoe UI',sans-serif;margin:0;background:#f7f7fb;color:#1d1d29}
main{max-width:56rem;margin:0 auto;padding:1.5rem;display:flex;flex-direction:column;gap:1.5rem}
h1{font-size:2.25rem;text-align:center;margin:0}
.center{text-align:center;font-size:1.1rem}
.card{background:#fff;border:1px solid #e2e2ea;border-radius:.5rem;box-shadow:0 1px 4px rgba(0,0,0,.06);padding:1rem}
.card h2{margin-top:0}
form{display:flex;flex-direction:column;gap:.75rem}
input{border:1px solid #c8c8d4;padding:.4rem .6rem;border-radius:.25rem;font-size:1rem}
button{background:#3b82f6;color:#fff;border:none;padding:.5rem 1rem;border-radius:.25rem;cursor:pointer;font-size:1rem}
button:hover{opacity:.9}
.notice{color:#b45309}
.member{border:1px solid #e2e2ea;border-radius:.5rem;padding:.75rem;margin-bottom:.75rem}
.member h3{margin:0 0 .5rem 0;display:flex;justify-content:space-between;align-items:center}
.member p{margin:.25rem 0}
.muted{color:#6b7280}
#graph{height:420px;border:1px solid #e2e2ea;border-radius:.25rem}
</style>
</head>
<body>
<main>
  <h1 id="title"></h1>
  <p id="tagline" class="center"></p>

  <section class="card">
    <h2 id="join-heading"></h2>
    <form id="join-form">
      <input id="name" name="name" maxlength="80" required>
      <input id="strengths" name="strengths">
      <input id="aspirations" name="aspirations">
      <input id="values" name="values">
      <button id="join-button" type="submit"></button>
    </form>
    <p id="notice" class="notice" hidden></p>
  </section>

  <section class="card">
    <h2 id="manifesto-heading"></h2>
    <div id="manifesto"></div>
  </section>

  <section class="card">
    <h2 id="graph-heading"></h2>
    <div id="graph"></div>
  </section>

  <section class="card">
    <h2 id="network-heading"></h2>
    <div id="network"></div>
  </section>
</main>
<script>
const T = {{strings}};

function setText(id, value) {
  document.getElementById(id).textContent = value;
}

function el(tag, text, cls) {
  const node = document.createElement(tag);
  if (text !== undefined) node.textContent = text;
  if (cls) node.className = cls;
  return node;
}

function notice(message) {
  const box = document.getElementById('notice');
  box.textContent = message;
  box.hidden = !message;
}

function applyStrings() {
  setText('title', T.title);
  setText('tagline', T.tagline);
  setText('join-heading', T.join_heading);
  setText('join-button', T.join_button);
  setText('manifesto-heading', T.manifesto_heading);
  setText('network-heading', T.network_heading);
  setText('graph-heading', T.graph_heading);
  document.getElementById('name').placeholder = T.name_placeholder;
  document.getElementById('strengths').placeholder = T.strengths_placeholder;
  document.getElementById('aspirations').placeholder = T.aspirations_placeholder;
  document.getElementById('values').placeholder = T.values_placeholder;
  const manifesto = document.getElementById('manifesto');
  T.manifesto.forEach((paragraph) => manifesto.appendChild(el('p', paragraph)));
}

function field(label, value) {
  const line = el('p');
  line.appendChild(el('strong', label + ' : '));
  line.appendChild(document.createTextNode(value));
  return line;
}

function renderProfiles(profiles) {
  const network = document.getElementById('network');
  network.replaceChildren();
  if (profiles.length === 0) {
    network.appendChild(el('p', T.empty_network, 'muted'));
    return;
  }
  profiles.forEach((person) => {
    const card = el('div', undefined, 'member');
    const heading = el('h3', person.name);
    const vote = el('button', T.vote_button + ' (' + person.votes + ')');
    vote.type = 'button';
    vote.addEventListener('click', () => castVote(person.id));
    heading.appendChild(vote);
    card.appendChild(heading);
    card.appendChild(field(T.strengths_label, person.display.strengths));
    card.appendChild(field(T.aspirations_label, person.display.aspirations));
    card.appendChild(field(T.values_label, person.display.values));
    card.appendChild(field(T.votes_label, String(person.votes)));
    network.appendChild(card);
  });
}

function renderGraph(graph) {
  if (typeof vis === 'undefined') return;
  const nodes = new vis.DataSet(graph.nodes.map((n) => ({
    id: n.id,
    label: n.label,
    value: n.votes + 1,
  })));
  const edges = new vis.DataSet(graph.edges.map((e) => ({
    from: e.from,
    to: e.to,
    value: e.weight,
    title: [].concat(e.shared.strengths, e.shared.aspirations, e.shared.values).join(', '),
  })));
  new vis.Network(document.getElementById('graph'), { nodes, edges }, {
    nodes: { shape: 'dot', scaling: { min: 10, max: 30 } },
    physics: { stabilization: true },
  });
}

async function refresh() {
  const [profiles, graph] = await Promise.all([
    fetch('/api/profiles?order=votes'),
    fetch('/api/graph'),
  ]);
  if (profiles.ok) renderProfiles(await profiles.json());
  if (graph.ok) renderGraph(await graph.json());
}

async function castVote(id) {
  const response = await fetch('/api/profiles/' + id + '/vote', { method: 'POST' });
  if (response.status === 429) {
    notice(T.vote_cooldown);
    return;
  }
  if (response.ok) {
    notice('');
    refresh();
  }
}

document.getElementById('join-form').addEventListener('submit', async (event) => {
  event.preventDefault();
  const form = event.target;
  const value = (id) => document.getElementById(id).value;
  const body = {
    name: value('name'),
    strengths: value('strengths'),
    aspirations: value('aspirations'),
    values: value('values'),
  };
  const response = await fetch('/api/profiles', {
    method: 'POST',
    headers: { 'Content-Type': 'application/json' },
    body: JSON.stringify(body),
  });
  if (response.status === 429) {
    notice(T.join_cooldown);
    return;
  }
  if (response.ok) {
    form.reset();
    notice('');
    refresh();
  }
});

applyStrings();
refresh();
</script>
</body>
</html>
"##;
